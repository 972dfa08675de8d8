//! Auth API Module

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::AppState;

/// Auth router
pub fn router() -> Router<AppState> {
    Router::new().nest("/api/auth", routes())
}

fn routes() -> Router<AppState> {
    // 登录公开；登出和当前用户由全局认证中间件把关
    Router::new()
        .route("/login", post(handler::login))
        .route("/logout", post(handler::logout))
        .route("/me", get(handler::me))
}
