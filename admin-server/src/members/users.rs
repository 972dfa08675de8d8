//! 用户管理服务
//!
//! 每个变更操作持有目录写锁走完「完整性检查 → 写入 → 传播」的全过程。

use chrono::Utc;
use serde::Deserialize;
use shared::PaginatedResponse;
use shared::models::{PermissionSet, User, UserCreate, UserStatus, UserUpdate};
use shared::{AppError, ErrorCode};
use uuid::Uuid;

use super::{integrity, propagation};
use crate::db::{Database, Directory};
use crate::utils::AppResult;

/// 用户列表筛选条件
///
/// 具名字段做精确匹配；`search` 在姓名/邮箱/工号上做大小写无关的子串匹配。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserFilters {
    pub department: Option<String>,
    pub role: Option<String>,
    pub status: Option<UserStatus>,
    pub search: Option<String>,
}

fn filter_users(dir: &Directory, filters: &UserFilters) -> Vec<User> {
    let search = filters.search.as_ref().map(|s| s.to_lowercase());
    dir.users
        .list()
        .into_iter()
        .filter(|u| {
            filters
                .department
                .as_ref()
                .is_none_or(|d| &u.department == d)
        })
        .filter(|u| filters.role.as_ref().is_none_or(|r| &u.role == r))
        .filter(|u| filters.status.is_none_or(|s| u.status == s))
        .filter(|u| {
            search.as_ref().is_none_or(|term| {
                u.name.to_lowercase().contains(term)
                    || u.email.to_lowercase().contains(term)
                    || u.employee_id.to_lowercase().contains(term)
            })
        })
        .collect()
}

/// 获取用户列表 (筛选 + 分页)
pub async fn list(
    db: &Database,
    filters: &UserFilters,
    page: u32,
    limit: u32,
) -> PaginatedResponse<User> {
    let dir = db.directory.read().await;
    PaginatedResponse::paginate(filter_users(&dir, filters), page, limit)
}

/// 获取单个用户
pub async fn get(db: &Database, id: &str) -> AppResult<User> {
    let dir = db.directory.read().await;
    dir.users
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::not_found(ErrorCode::UserNotFound, format!("User {id}")))
}

/// 获取用户的解析权限集
pub async fn permissions(db: &Database, id: &str) -> AppResult<PermissionSet> {
    let dir = db.directory.read().await;
    dir.users
        .get(id)
        .map(|u| u.permissions.clone())
        .ok_or_else(|| AppError::not_found(ErrorCode::UserNotFound, format!("User {id}")))
}

/// 创建用户
///
/// 权限集从角色解析拷贝；所属部门成员数和角色持有数随后刷新。
pub async fn create(db: &Database, data: UserCreate) -> AppResult<User> {
    let mut dir = db.directory.write().await;
    let (department, role) = integrity::check_user_create(&dir, &data)?;

    let password_hash = match &data.password {
        Some(password) => User::hash_password(password)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?,
        None => String::new(),
    };
    let report_to = data
        .report_to_id
        .as_ref()
        .and_then(|id| dir.users.get(id))
        .map(|u| u.name.clone());

    let now = Utc::now();
    let user = User {
        id: Uuid::new_v4().to_string(),
        employee_id: data.employee_id,
        name: data.name,
        email: data.email,
        phone: data.phone,
        avatar: data.avatar.unwrap_or_default(),
        department_id: department.id.clone(),
        department: department.name.clone(),
        position: data.position,
        role_id: role.id.clone(),
        role: role.name.clone(),
        permissions: role.permissions.clone(),
        status: data.status.unwrap_or(UserStatus::Pending),
        password_hash,
        last_login: None,
        report_to,
        report_to_id: data.report_to_id,
        join_date: now,
        created_at: now,
        updated_at: now,
    };

    dir.users.insert(user.clone());
    propagation::refresh_member_count(&mut dir, &department.id);
    propagation::refresh_user_count(&mut dir, &role.id);

    tracing::info!(user_id = %user.id, email = %user.email, "user created");
    Ok(user)
}

/// 更新用户
///
/// 角色变更会重新解析权限集；转部门会刷新新旧两个部门的成员数。
pub async fn update(db: &Database, id: &str, data: UserUpdate) -> AppResult<User> {
    let mut dir = db.directory.write().await;
    let existing = dir
        .users
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::not_found(ErrorCode::UserNotFound, format!("User {id}")))?;

    let (new_department, new_role) = integrity::check_user_update(&dir, &existing, &data)?;

    let password_hash = match &data.password {
        Some(password) => Some(
            User::hash_password(password)
                .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?,
        ),
        None => None,
    };
    let report_to = match &data.report_to_id {
        Some(report_to_id) => dir.users.get(report_to_id).map(|u| u.name.clone()),
        None => existing.report_to.clone(),
    };

    let old_department_id = existing.department_id.clone();
    let old_role_id = existing.role_id.clone();

    let user = {
        let entry = dir
            .users
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(ErrorCode::UserNotFound, format!("User {id}")))?;

        if let Some(employee_id) = data.employee_id {
            entry.employee_id = employee_id;
        }
        if let Some(name) = data.name {
            entry.name = name;
        }
        if let Some(email) = data.email {
            entry.email = email;
        }
        if let Some(phone) = data.phone {
            entry.phone = phone;
        }
        if let Some(avatar) = data.avatar {
            entry.avatar = avatar;
        }
        if let Some(position) = data.position {
            entry.position = position;
        }
        if let Some(status) = data.status {
            entry.status = status;
        }
        if let Some(hash) = password_hash {
            entry.password_hash = hash;
        }
        if data.report_to_id.is_some() {
            entry.report_to_id = data.report_to_id;
            entry.report_to = report_to;
        }
        if let Some(department) = &new_department {
            entry.department_id = department.id.clone();
            entry.department = department.name.clone();
        }
        if let Some(role) = &new_role {
            entry.role_id = role.id.clone();
            entry.role = role.name.clone();
            entry.permissions = role.permissions.clone();
        }
        entry.updated_at = Utc::now();
        entry.clone()
    };

    if let Some(department) = &new_department
        && department.id != old_department_id
    {
        propagation::refresh_member_count(&mut dir, &old_department_id);
        propagation::refresh_member_count(&mut dir, &department.id);
    }
    if let Some(role) = &new_role
        && role.id != old_role_id
    {
        propagation::refresh_user_count(&mut dir, &old_role_id);
        propagation::refresh_user_count(&mut dir, &role.id);
    }

    tracing::info!(user_id = %user.id, "user updated");
    Ok(user)
}

/// 删除用户 (无依赖方，删除无条件)
pub async fn delete(db: &Database, id: &str) -> AppResult<()> {
    let mut dir = db.directory.write().await;
    let removed = dir
        .users
        .remove(id)
        .ok_or_else(|| AppError::not_found(ErrorCode::UserNotFound, format!("User {id}")))?;

    propagation::refresh_member_count(&mut dir, &removed.department_id);
    propagation::refresh_user_count(&mut dir, &removed.role_id);

    tracing::info!(user_id = %id, "user deleted");
    Ok(())
}
