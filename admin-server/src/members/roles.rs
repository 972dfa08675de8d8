//! 角色管理服务

use chrono::Utc;
use shared::models::{EntityStatus, PermissionSet, Role, RoleCreate, RoleUpdate};
use shared::{AppError, ErrorCode};
use uuid::Uuid;

use super::{integrity, propagation};
use crate::db::Database;
use crate::utils::AppResult;

/// 获取角色列表
pub async fn list(db: &Database) -> Vec<Role> {
    let dir = db.directory.read().await;
    dir.roles.list()
}

/// 获取单个角色
pub async fn get(db: &Database, id: &str) -> AppResult<Role> {
    let dir = db.directory.read().await;
    dir.roles
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::not_found(ErrorCode::RoleNotFound, format!("Role {id}")))
}

/// 创建角色
pub async fn create(db: &Database, data: RoleCreate) -> AppResult<Role> {
    let mut dir = db.directory.write().await;
    integrity::check_role_create(&dir, &data)?;

    let now = Utc::now();
    let role = Role {
        id: Uuid::new_v4().to_string(),
        name: data.name,
        code: data.code,
        description: data.description,
        permissions: PermissionSet::from_raw(data.permissions),
        level: data.level,
        status: data.status.unwrap_or(EntityStatus::Active),
        user_count: 0,
        created_at: now,
        updated_at: now,
    };
    dir.roles.insert(role.clone());

    tracing::info!(role_id = %role.id, code = %role.code, "role created");
    Ok(role)
}

/// 更新角色
///
/// 权限或名称变更后，立即把解析结果写回所有持有该角色的用户。
pub async fn update(db: &Database, id: &str, data: RoleUpdate) -> AppResult<Role> {
    let mut dir = db.directory.write().await;
    let existing = dir
        .roles
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::not_found(ErrorCode::RoleNotFound, format!("Role {id}")))?;

    integrity::check_role_update(&dir, &existing, &data)?;

    let new_permissions = data.permissions.map(PermissionSet::from_raw);
    let permissions_changed = new_permissions
        .as_ref()
        .is_some_and(|p| p != &existing.permissions);
    let name_changed = data.name.as_ref().is_some_and(|n| n != &existing.name);

    let role = {
        let entry = dir
            .roles
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(ErrorCode::RoleNotFound, format!("Role {id}")))?;

        if let Some(name) = data.name {
            entry.name = name;
        }
        if let Some(code) = data.code {
            entry.code = code;
        }
        if let Some(description) = data.description {
            entry.description = description;
        }
        if let Some(permissions) = new_permissions {
            entry.permissions = permissions;
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

    if permissions_changed || name_changed {
        let updated = propagation::propagate_role_change(&mut dir, id);
        tracing::info!(role_id = %id, users_updated = updated, "role change propagated");
    }

    Ok(role)
}

/// 删除角色；仍被用户引用时拒绝
pub async fn delete(db: &Database, id: &str) -> AppResult<()> {
    let mut dir = db.directory.write().await;
    let existing = dir
        .roles
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::not_found(ErrorCode::RoleNotFound, format!("Role {id}")))?;

    integrity::check_role_delete(&dir, &existing)?;
    dir.roles.remove(id);

    tracing::info!(role_id = %id, "role deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::members::users;
    use shared::models::{UserCreate, UserStatus};

    fn qa_role() -> RoleCreate {
        RoleCreate {
            name: "QA".to_string(),
            code: "QA_ENGINEER".to_string(),
            description: "Quality assurance".to_string(),
            permissions: vec!["project.read".to_string()],
            level: 3,
            status: None,
        }
    }

    fn user_with_role(role_id: &str) -> UserCreate {
        UserCreate {
            employee_id: "U200".to_string(),
            name: "QA User".to_string(),
            email: "qa.user@company.com".to_string(),
            phone: "13812349999".to_string(),
            avatar: None,
            department_id: "dept_1".to_string(),
            position: "QA Engineer".to_string(),
            role_id: role_id.to_string(),
            report_to_id: None,
            status: Some(UserStatus::Active),
            password: None,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_duplicates_and_bad_shapes() {
        let db = Database::seeded();

        let mut dup_name = qa_role();
        dup_name.name = "Developer".to_string();
        assert_eq!(
            create(&db, dup_name).await.unwrap_err().code,
            ErrorCode::RoleNameExists
        );

        let mut dup_code = qa_role();
        dup_code.code = "DEVELOPER".to_string();
        assert_eq!(
            create(&db, dup_code).await.unwrap_err().code,
            ErrorCode::RoleCodeExists
        );

        let mut bad_code = qa_role();
        bad_code.code = "qa-engineer".to_string();
        assert_eq!(
            create(&db, bad_code).await.unwrap_err().code,
            ErrorCode::ValidationFailed
        );

        let mut bad_level = qa_role();
        bad_level.level = 11;
        assert_eq!(
            create(&db, bad_level).await.unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
    }

    #[tokio::test]
    async fn test_permission_update_propagates_to_users() {
        let db = Database::seeded();
        let role = create(&db, qa_role()).await.expect("role");
        let user = users::create(&db, user_with_role(&role.id))
            .await
            .expect("user");
        assert!(user.permissions.contains("project.read"));
        assert!(!user.permissions.contains("project.update"));

        update(
            &db,
            &role.id,
            RoleUpdate {
                permissions: Some(vec![
                    "project.read".to_string(),
                    "project.update".to_string(),
                ]),
                ..Default::default()
            },
        )
        .await
        .expect("update");

        let refreshed = users::get(&db, &user.id).await.expect("user");
        assert!(refreshed.permissions.contains("project.update"));
        assert!(refreshed.updated_at > user.updated_at);
    }

    #[tokio::test]
    async fn test_wildcard_update_resolves_to_all() {
        let db = Database::seeded();
        let role = create(&db, qa_role()).await.expect("role");
        let user = users::create(&db, user_with_role(&role.id))
            .await
            .expect("user");

        update(
            &db,
            &role.id,
            RoleUpdate {
                permissions: Some(vec!["*".to_string()]),
                ..Default::default()
            },
        )
        .await
        .expect("update");

        let refreshed = users::get(&db, &user.id).await.expect("user");
        assert!(refreshed.permissions.is_all());
    }

    #[tokio::test]
    async fn test_delete_blocked_while_users_hold_role() {
        let db = Database::seeded();
        let role = create(&db, qa_role()).await.expect("role");
        let user = users::create(&db, user_with_role(&role.id))
            .await
            .expect("user");

        let err = delete(&db, &role.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RoleInUse);
        assert!(err.message.contains('1'));
        // 角色集合未被改动
        assert!(get(&db, &role.id).await.is_ok());

        users::delete(&db, &user.id).await.expect("delete user");
        delete(&db, &role.id).await.expect("delete role");
        assert_eq!(
            get(&db, &role.id).await.unwrap_err().code,
            ErrorCode::RoleNotFound
        );
    }

    #[tokio::test]
    async fn test_update_excludes_self_from_uniqueness() {
        let db = Database::seeded();
        let role = create(&db, qa_role()).await.expect("role");

        // 保留自己的名字不算冲突
        assert!(
            update(
                &db,
                &role.id,
                RoleUpdate {
                    name: Some("QA".to_string()),
                    ..Default::default()
                },
            )
            .await
            .is_ok()
        );

        let err = update(
            &db,
            &role.id,
            RoleUpdate {
                name: Some("Developer".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::RoleNameExists);
    }
}
