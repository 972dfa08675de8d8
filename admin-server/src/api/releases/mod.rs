//! Release API Module
//!
//! Mounted at `/api/versions` for frontend compatibility.

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::{require_admin, require_roles};
use crate::core::AppState;

/// 版本创建/更新/回滚/部署的角色名单
const RELEASE_MANAGER_ROLES: &[&str] = &["Super Admin", "Department Admin"];

/// Release-tracking router
pub fn router() -> Router<AppState> {
    Router::new().nest("/api/versions", routes())
}

fn routes() -> Router<AppState> {
    let read_routes = Router::new()
        .route("/", get(handler::list_releases))
        .route("/{id}", get(handler::get_release))
        .route("/deployments/list", get(handler::list_deployments));

    // 管理路由：版本操作限定管理角色
    let manage_routes = Router::new()
        .route("/", post(handler::create_release))
        .route("/{id}", axum::routing::put(handler::update_release))
        .route("/{id}/rollback", post(handler::rollback_release))
        .route("/deployments", post(handler::create_deployment))
        .layer(middleware::from_fn(require_roles(RELEASE_MANAGER_ROLES)));

    // 删除版本仅管理员
    let delete_routes = Router::new()
        .route("/{id}", axum::routing::delete(handler::delete_release))
        .layer(middleware::from_fn(require_admin));

    read_routes.merge(manage_routes).merge(delete_routes)
}
