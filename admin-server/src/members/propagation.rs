//! 变更传播
//!
//! 结构性变更之后保持反范式字段一致：角色权限/名称写回持有该角色的用户，
//! 部门改名写回成员用户，派生计数重新计算。传播和触发它的变更在同一个
//! 写锁临界区内完成：先收集受影响的行，再整批写入，读者不会看到半批状态。

use chrono::Utc;

use crate::db::Directory;

/// 角色变更后，把当前名称和解析后的权限集写回每个持有者
///
/// 返回更新的用户数。每行都会刷新 `updated_at`。
pub fn propagate_role_change(dir: &mut Directory, role_id: &str) -> usize {
    let Some(role) = dir.roles.get(role_id) else {
        return 0;
    };
    let name = role.name.clone();
    let permissions = role.permissions.clone();
    let now = Utc::now();

    let affected: Vec<String> = dir
        .users
        .values()
        .filter(|u| u.role_id == role_id)
        .map(|u| u.id.clone())
        .collect();

    for id in &affected {
        if let Some(user) = dir.users.get_mut(id) {
            user.role = name.clone();
            user.permissions = permissions.clone();
            user.updated_at = now;
        }
    }

    affected.len()
}

/// 部门改名后，把新名称写回每个成员用户的展示字段
///
/// 返回更新的用户数。
pub fn propagate_department_rename(dir: &mut Directory, department_id: &str) -> usize {
    let Some(department) = dir.departments.get(department_id) else {
        return 0;
    };
    let name = department.name.clone();
    let now = Utc::now();

    let affected: Vec<String> = dir
        .users
        .values()
        .filter(|u| u.department_id == department_id)
        .map(|u| u.id.clone())
        .collect();

    for id in &affected {
        if let Some(user) = dir.users.get_mut(id) {
            user.department = name.clone();
            user.updated_at = now;
        }
    }

    affected.len()
}

/// 重新计算并写回部门成员数
///
/// 用户创建/删除/转部门后调用；这是 `member_count` 的唯一写入路径。
pub fn refresh_member_count(dir: &mut Directory, department_id: &str) {
    let count = dir
        .users
        .values()
        .filter(|u| u.department_id == department_id)
        .count() as u32;
    if let Some(department) = dir.departments.get_mut(department_id) {
        department.member_count = count;
    }
}

/// 重新计算并写回角色持有者数
///
/// 用户创建/删除/换角色后调用；这是 `user_count` 的唯一写入路径。
pub fn refresh_user_count(dir: &mut Directory, role_id: &str) {
    let count = dir.users.values().filter(|u| u.role_id == role_id).count() as u32;
    if let Some(role) = dir.roles.get_mut(role_id) {
        role.user_count = count;
    }
}
