//! 访问决策
//!
//! 给定「调用者 + 所需能力」回答允许/拒绝。检查按从宽到窄排列：
//! 已认证 → 权限点 → 角色列表 → 管理员 → 部门范围，可组合、短路。
//!
//! 调用者的权限集与角色层级在每次请求时从目录中重新解析，而不是信任令牌里
//! 的快照，因此角色权限变更传播后立即生效。

use shared::models::{PermissionSet, RoleTier};
use shared::{AppError, ErrorCode};

use crate::db::Directory;
use crate::utils::AppResult;

/// 当前请求的调用者 (由认证中间件解析并注入请求扩展)
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// 用户 ID
    pub id: String,
    /// 用户姓名
    pub name: String,
    /// 角色名称
    pub role_name: String,
    /// 角色层级
    pub tier: RoleTier,
    /// 解析后的权限集
    pub permissions: PermissionSet,
    /// 所属部门 ID
    pub department_id: String,
}

impl CurrentUser {
    /// 是否管理员 (顶级角色或通配权限)
    pub fn is_admin(&self) -> bool {
        self.tier == RoleTier::Super || self.permissions.is_all()
    }

    /// 检查是否拥有指定权限
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}

/// 单项访问要求
#[derive(Debug, Clone, Copy)]
pub enum AccessRequirement<'a> {
    /// 权限点，如 `user.create`
    Permission(&'a str),
    /// 角色名单之一
    AnyRole(&'a [&'a str]),
    /// 管理员
    Admin,
    /// 目标部门范围 (部门管理员只能操作本部门)
    Department(&'a str),
}

/// 根据当前目录状态解析调用者
///
/// 令牌主体必须仍然指向一个存在的用户，否则视为未认证。
pub fn resolve_caller(dir: &Directory, user_id: &str) -> AppResult<CurrentUser> {
    let user = dir
        .users
        .get(user_id)
        .ok_or_else(|| AppError::with_message(ErrorCode::NotAuthenticated, "User no longer exists"))?;

    let tier = dir
        .roles
        .get(&user.role_id)
        .map(|role| RoleTier::from_code(&role.code))
        .unwrap_or(RoleTier::Standard);

    Ok(CurrentUser {
        id: user.id.clone(),
        name: user.name.clone(),
        role_name: user.role.clone(),
        tier,
        permissions: user.permissions.clone(),
        department_id: user.department_id.clone(),
    })
}

/// 检查单项访问要求
pub fn check_access(user: &CurrentUser, requirement: &AccessRequirement<'_>) -> AppResult<()> {
    match requirement {
        AccessRequirement::Permission(permission) => {
            if user.has_permission(permission) {
                Ok(())
            } else {
                Err(AppError::forbidden(format!(
                    "Permission denied: {permission}"
                )))
            }
        }
        AccessRequirement::AnyRole(roles) => {
            // 通配权限持有者不受角色名单限制
            if user.permissions.is_all() || roles.iter().any(|r| *r == user.role_name) {
                Ok(())
            } else {
                Err(AppError::with_message(
                    ErrorCode::RoleRequired,
                    format!("Requires one of roles: {}", roles.join(", ")),
                ))
            }
        }
        AccessRequirement::Admin => {
            if user.is_admin() {
                Ok(())
            } else {
                Err(AppError::new(ErrorCode::AdminRequired))
            }
        }
        AccessRequirement::Department(target) => {
            // 顶级管理员不受部门范围限制；普通角色由权限检查把关
            if user.is_admin() {
                return Ok(());
            }
            if user.tier == RoleTier::Department && user.department_id != *target {
                Err(AppError::new(ErrorCode::DepartmentScopeDenied))
            } else {
                Ok(())
            }
        }
    }
}

/// 按顺序检查多项要求，遇到第一个失败即返回
pub fn check_all(user: &CurrentUser, requirements: &[AccessRequirement<'_>]) -> AppResult<()> {
    for requirement in requirements {
        check_access(user, requirement)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caller(tier: RoleTier, permissions: PermissionSet) -> CurrentUser {
        CurrentUser {
            id: "user_1".to_string(),
            name: "Alice Chen".to_string(),
            role_name: match tier {
                RoleTier::Super => "Super Admin".to_string(),
                RoleTier::Department => "Department Admin".to_string(),
                RoleTier::Standard => "Member".to_string(),
            },
            tier,
            permissions,
            department_id: "dept_1".to_string(),
        }
    }

    #[test]
    fn test_wildcard_caller_allowed_everything() {
        let user = caller(RoleTier::Standard, PermissionSet::All);
        assert!(check_access(&user, &AccessRequirement::Permission("user.delete")).is_ok());
        assert!(check_access(&user, &AccessRequirement::Admin).is_ok());
        assert!(check_access(&user, &AccessRequirement::AnyRole(&["Super Admin"])).is_ok());
        assert!(check_access(&user, &AccessRequirement::Department("dept_9")).is_ok());
        assert!(user.is_admin());
    }

    #[test]
    fn test_empty_permissions_denied() {
        let user = caller(RoleTier::Standard, PermissionSet::none());
        let err = check_access(&user, &AccessRequirement::Permission("user.read")).unwrap_err();
        assert_eq!(err.code, ErrorCode::PermissionDenied);
        assert!(check_access(&user, &AccessRequirement::Admin).is_err());
    }

    #[test]
    fn test_literal_permission_match() {
        let user = caller(
            RoleTier::Standard,
            PermissionSet::from_raw(vec!["user.read".to_string()]),
        );
        assert!(check_access(&user, &AccessRequirement::Permission("user.read")).is_ok());
        assert!(check_access(&user, &AccessRequirement::Permission("user.create")).is_err());
    }

    #[test]
    fn test_role_list() {
        let user = caller(RoleTier::Department, PermissionSet::none());
        assert!(
            check_access(
                &user,
                &AccessRequirement::AnyRole(&["Super Admin", "Department Admin"])
            )
            .is_ok()
        );
        let err = check_access(&user, &AccessRequirement::AnyRole(&["Super Admin"])).unwrap_err();
        assert_eq!(err.code, ErrorCode::RoleRequired);
    }

    #[test]
    fn test_department_scope() {
        let dept_admin = caller(RoleTier::Department, PermissionSet::none());
        assert!(check_access(&dept_admin, &AccessRequirement::Department("dept_1")).is_ok());
        let err =
            check_access(&dept_admin, &AccessRequirement::Department("dept_2")).unwrap_err();
        assert_eq!(err.code, ErrorCode::DepartmentScopeDenied);

        // 顶级管理员不受范围限制
        let admin = caller(RoleTier::Super, PermissionSet::All);
        assert!(check_access(&admin, &AccessRequirement::Department("dept_2")).is_ok());

        // 普通角色不在本检查范围内
        let member = caller(RoleTier::Standard, PermissionSet::none());
        assert!(check_access(&member, &AccessRequirement::Department("dept_2")).is_ok());
    }

    #[test]
    fn test_check_all_short_circuits() {
        let user = caller(
            RoleTier::Department,
            PermissionSet::from_raw(vec!["user.create".to_string()]),
        );
        let requirements = [
            AccessRequirement::Permission("user.create"),
            AccessRequirement::Department("dept_2"),
        ];
        let err = check_all(&user, &requirements).unwrap_err();
        assert_eq!(err.code, ErrorCode::DepartmentScopeDenied);

        let requirements = [
            AccessRequirement::Permission("user.create"),
            AccessRequirement::Department("dept_1"),
        ];
        assert!(check_all(&user, &requirements).is_ok());
    }
}
