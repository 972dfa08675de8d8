//! Dashboard API Module

mod handler;

use axum::{Router, routing::get, routing::put};

use crate::core::AppState;

/// Dashboard router
pub fn router() -> Router<AppState> {
    Router::new().nest("/api/dashboard", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/statistics", get(handler::statistics))
        .route("/applications", get(handler::list_applications))
        .route(
            "/applications/{id}/status",
            put(handler::update_application_status),
        )
        .route("/overview", get(handler::overview))
}
