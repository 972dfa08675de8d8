//! Member API Module

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::auth::{require_admin, require_permission};
use crate::core::AppState;

/// Member-management router
pub fn router() -> Router<AppState> {
    Router::new().nest("/api/members", routes())
}

fn routes() -> Router<AppState> {
    // 读取路由：登录即可访问
    let read_routes = Router::new()
        .route("/users", get(handler::list_users))
        .route("/users/{id}", get(handler::get_user))
        .route("/users/{id}/permissions", get(handler::user_permissions))
        .route("/roles", get(handler::list_roles))
        .route("/roles/{id}", get(handler::get_role))
        .route("/departments", get(handler::list_departments))
        .route("/departments/{id}", get(handler::get_department))
        .route("/permissions", get(handler::list_permissions))
        .route("/permissions/tree", get(handler::permission_tree))
        .route("/organization/tree", get(handler::organization_tree))
        .route("/organization/reports", get(handler::report_relations))
        .route("/statistics", get(handler::statistics));

    // 用户管理路由：逐操作权限点；部门范围在 handler 内检查
    let user_create = Router::new()
        .route("/users", post(handler::create_user))
        .layer(middleware::from_fn(require_permission("user.create")));
    let user_update = Router::new()
        .route("/users/{id}", put(handler::update_user))
        .layer(middleware::from_fn(require_permission("user.update")));
    let user_delete = Router::new()
        .route("/users/{id}", delete(handler::delete_user))
        .layer(middleware::from_fn(require_permission("user.delete")));

    // 角色与部门管理：仅管理员
    let role_manage = Router::new()
        .route("/roles", post(handler::create_role))
        .route(
            "/roles/{id}",
            put(handler::update_role).delete(handler::delete_role),
        )
        .layer(middleware::from_fn(require_admin));
    let department_manage = Router::new()
        .route("/departments", post(handler::create_department))
        .route(
            "/departments/{id}",
            put(handler::update_department).delete(handler::delete_department),
        )
        .layer(middleware::from_fn(require_admin));

    read_routes
        .merge(user_create)
        .merge(user_update)
        .merge(user_delete)
        .merge(role_manage)
        .merge(department_manage)
}
