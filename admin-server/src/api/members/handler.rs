//! Member API Handlers

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
};
use serde::Deserialize;
use shared::models::{
    Department, DepartmentCreate, DepartmentUpdate, MemberStatistics, OrgNode, Permission,
    PermissionNode, PermissionSet, ReportRelation, Role, RoleCreate, RoleUpdate, User,
    UserCreate, UserStatus, UserUpdate,
};
use shared::request::PageQuery;
use shared::{ApiResponse, PaginatedResponse};

use crate::auth::{AccessRequirement, CurrentUser, check_access};
use crate::core::AppState;
use crate::members::{self, UserFilters, build_permission_tree};
use crate::utils::AppResult;

// ==================== 用户 ====================

/// 用户列表查询参数
#[derive(Debug, Deserialize)]
pub struct UserListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub department: Option<String>,
    pub role: Option<String>,
    pub status: Option<UserStatus>,
    pub search: Option<String>,
}

/// GET /api/members/users - 用户列表 (筛选 + 分页)
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<UserListQuery>,
) -> AppResult<ApiResponse<PaginatedResponse<User>>> {
    let page = PageQuery {
        page: query.page,
        limit: query.limit,
    };
    let filters = UserFilters {
        department: query.department,
        role: query.role,
        status: query.status,
        search: query.search,
    };
    let result = members::users::list(&state.db, &filters, page.page(), page.limit()).await;
    Ok(ApiResponse::ok(result))
}

/// GET /api/members/users/{id} - 单个用户
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<User>> {
    let user = members::users::get(&state.db, &id).await?;
    Ok(ApiResponse::ok(user))
}

/// GET /api/members/users/{id}/permissions - 用户解析权限
pub async fn user_permissions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<PermissionSet>> {
    let permissions = members::users::permissions(&state.db, &id).await?;
    Ok(ApiResponse::ok(permissions))
}

/// POST /api/members/users - 创建用户
///
/// 部门管理员只能在本部门创建用户。
pub async fn create_user(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<UserCreate>,
) -> AppResult<ApiResponse<User>> {
    check_access(
        &current_user,
        &AccessRequirement::Department(&payload.department_id),
    )?;
    let user = members::users::create(&state.db, payload).await?;
    Ok(ApiResponse::ok_with_message(user, "User created"))
}

/// PUT /api/members/users/{id} - 更新用户
///
/// 目标用户与换入部门都要在调用者的管理范围内。
pub async fn update_user(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<UserUpdate>,
) -> AppResult<ApiResponse<User>> {
    let existing = members::users::get(&state.db, &id).await?;
    check_access(
        &current_user,
        &AccessRequirement::Department(&existing.department_id),
    )?;
    if let Some(department_id) = &payload.department_id {
        check_access(&current_user, &AccessRequirement::Department(department_id))?;
    }

    let user = members::users::update(&state.db, &id, payload).await?;
    Ok(ApiResponse::ok_with_message(user, "User updated"))
}

/// DELETE /api/members/users/{id} - 删除用户
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let existing = members::users::get(&state.db, &id).await?;
    check_access(
        &current_user,
        &AccessRequirement::Department(&existing.department_id),
    )?;

    members::users::delete(&state.db, &id).await?;
    Ok(ApiResponse::message("User deleted"))
}

// ==================== 角色 ====================

/// GET /api/members/roles - 角色列表
pub async fn list_roles(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<Role>>> {
    Ok(ApiResponse::ok(members::roles::list(&state.db).await))
}

/// GET /api/members/roles/{id} - 单个角色
pub async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Role>> {
    let role = members::roles::get(&state.db, &id).await?;
    Ok(ApiResponse::ok(role))
}

/// POST /api/members/roles - 创建角色
pub async fn create_role(
    State(state): State<AppState>,
    Json(payload): Json<RoleCreate>,
) -> AppResult<ApiResponse<Role>> {
    let role = members::roles::create(&state.db, payload).await?;
    Ok(ApiResponse::ok_with_message(role, "Role created"))
}

/// PUT /api/members/roles/{id} - 更新角色 (权限变更会扇出到持有者)
pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<RoleUpdate>,
) -> AppResult<ApiResponse<Role>> {
    let role = members::roles::update(&state.db, &id, payload).await?;
    Ok(ApiResponse::ok_with_message(role, "Role updated"))
}

/// DELETE /api/members/roles/{id} - 删除角色
pub async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    members::roles::delete(&state.db, &id).await?;
    Ok(ApiResponse::message("Role deleted"))
}

// ==================== 部门 ====================

/// GET /api/members/departments - 部门列表
pub async fn list_departments(
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<Department>>> {
    Ok(ApiResponse::ok(members::departments::list(&state.db).await))
}

/// GET /api/members/departments/{id} - 单个部门
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Department>> {
    let department = members::departments::get(&state.db, &id).await?;
    Ok(ApiResponse::ok(department))
}

/// POST /api/members/departments - 创建部门
pub async fn create_department(
    State(state): State<AppState>,
    Json(payload): Json<DepartmentCreate>,
) -> AppResult<ApiResponse<Department>> {
    let department = members::departments::create(&state.db, payload).await?;
    Ok(ApiResponse::ok_with_message(department, "Department created"))
}

/// PUT /api/members/departments/{id} - 更新部门 (改名会扇出到成员)
pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<DepartmentUpdate>,
) -> AppResult<ApiResponse<Department>> {
    let department = members::departments::update(&state.db, &id, payload).await?;
    Ok(ApiResponse::ok_with_message(department, "Department updated"))
}

/// DELETE /api/members/departments/{id} - 删除部门
pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    members::departments::delete(&state.db, &id).await?;
    Ok(ApiResponse::message("Department deleted"))
}

// ==================== 权限 / 组织 / 统计 ====================

/// GET /api/members/permissions - 权限目录
pub async fn list_permissions(
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<Permission>>> {
    let dir = state.db.directory.read().await;
    Ok(ApiResponse::ok(dir.permissions.clone()))
}

/// GET /api/members/permissions/tree - 权限树
pub async fn permission_tree(
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<PermissionNode>>> {
    let dir = state.db.directory.read().await;
    Ok(ApiResponse::ok(build_permission_tree(&dir.permissions)))
}

/// GET /api/members/organization/tree - 组织架构树
pub async fn organization_tree(
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<OrgNode>>> {
    let dir = state.db.directory.read().await;
    Ok(ApiResponse::ok(dir.org_tree.clone()))
}

/// GET /api/members/organization/reports - 汇报关系
pub async fn report_relations(
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<ReportRelation>>> {
    let dir = state.db.directory.read().await;
    Ok(ApiResponse::ok(dir.report_relations.clone()))
}

/// GET /api/members/statistics - 成员统计
pub async fn statistics(
    State(state): State<AppState>,
) -> AppResult<ApiResponse<MemberStatistics>> {
    Ok(ApiResponse::ok(
        members::statistics::member_statistics(&state.db).await,
    ))
}
