//! Project API Module

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::AppState;

/// Project-tracking router
pub fn router() -> Router<AppState> {
    Router::new().nest("/api/projects", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/projects",
            get(handler::list_projects).post(handler::create_project),
        )
        .route(
            "/projects/{id}",
            get(handler::get_project)
                .put(handler::update_project)
                .delete(handler::delete_project),
        )
        .route(
            "/milestones",
            get(handler::list_milestones).post(handler::create_milestone),
        )
        .route(
            "/milestones/{id}",
            put(handler::update_milestone).delete(handler::delete_milestone),
        )
        .route(
            "/code-reviews",
            get(handler::list_code_reviews).post(handler::create_code_review),
        )
        .route(
            "/code-reviews/{id}",
            get(handler::get_code_review)
                .put(handler::update_code_review)
                .delete(handler::delete_code_review),
        )
        .route(
            "/branches",
            get(handler::list_branches).post(handler::create_branch),
        )
        .route(
            "/branches/{id}",
            put(handler::update_branch).delete(handler::delete_branch),
        )
        .route("/statistics", get(handler::project_statistics))
        .route("/dashboard", get(handler::project_dashboard))
}
