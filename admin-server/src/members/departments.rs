//! 部门管理服务

use chrono::Utc;
use shared::models::{Department, DepartmentCreate, DepartmentUpdate, EntityStatus};
use shared::{AppError, ErrorCode};
use uuid::Uuid;

use super::{integrity, propagation};
use crate::db::Database;
use crate::utils::AppResult;

/// 获取部门列表
pub async fn list(db: &Database) -> Vec<Department> {
    let dir = db.directory.read().await;
    dir.departments.list()
}

/// 获取单个部门
pub async fn get(db: &Database, id: &str) -> AppResult<Department> {
    let dir = db.directory.read().await;
    dir.departments
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::not_found(ErrorCode::DepartmentNotFound, format!("Department {id}")))
}

/// 创建部门
pub async fn create(db: &Database, data: DepartmentCreate) -> AppResult<Department> {
    let mut dir = db.directory.write().await;
    integrity::check_department_create(&dir, &data)?;

    let now = Utc::now();
    let department = Department {
        id: Uuid::new_v4().to_string(),
        name: data.name,
        code: data.code,
        description: data.description.unwrap_or_default(),
        parent_id: data.parent_id,
        manager: data.manager,
        manager_id: data.manager_id,
        member_count: 0,
        level: data.level,
        status: data.status.unwrap_or(EntityStatus::Active),
        created_at: now,
        updated_at: now,
    };
    dir.departments.insert(department.clone());

    tracing::info!(department_id = %department.id, code = %department.code, "department created");
    Ok(department)
}

/// 更新部门
///
/// 改名后把新名称写回所有成员用户的展示字段。
pub async fn update(db: &Database, id: &str, data: DepartmentUpdate) -> AppResult<Department> {
    let mut dir = db.directory.write().await;
    let existing = dir
        .departments
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::not_found(ErrorCode::DepartmentNotFound, format!("Department {id}")))?;

    integrity::check_department_update(&dir, &existing, &data)?;

    let name_changed = data.name.as_ref().is_some_and(|n| n != &existing.name);

    let department = {
        let entry = dir.departments.get_mut(id).ok_or_else(|| {
            AppError::not_found(ErrorCode::DepartmentNotFound, format!("Department {id}"))
        })?;

        if let Some(name) = data.name {
            entry.name = name;
        }
        if let Some(code) = data.code {
            entry.code = code;
        }
        if let Some(description) = data.description {
            entry.description = description;
        }
        if let Some(parent_id) = data.parent_id {
            entry.parent_id = Some(parent_id);
        }
        if let Some(manager) = data.manager {
            entry.manager = manager;
        }
        if let Some(manager_id) = data.manager_id {
            entry.manager_id = Some(manager_id);
        }
        if let Some(level) = data.level {
            entry.level = level;
        }
        if let Some(status) = data.status {
            entry.status = status;
        }
        entry.updated_at = Utc::now();
        entry.clone()
    };

    if name_changed {
        let updated = propagation::propagate_department_rename(&mut dir, id);
        tracing::info!(department_id = %id, users_updated = updated, "department rename propagated");
    }

    Ok(department)
}

/// 删除部门；仍有成员或子部门时拒绝
pub async fn delete(db: &Database, id: &str) -> AppResult<()> {
    let mut dir = db.directory.write().await;
    let existing = dir
        .departments
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::not_found(ErrorCode::DepartmentNotFound, format!("Department {id}")))?;

    integrity::check_department_delete(&dir, &existing)?;
    dir.departments.remove(id);

    tracing::info!(department_id = %id, "department deleted");
    Ok(())
}
