//! 认证与访问控制
//!
//! - [`jwt`] - JWT 令牌签发与验证
//! - [`tokens`] - 活跃令牌注册表 (登出即撤销)
//! - [`access`] - 访问决策 (权限/角色/管理员/部门范围)
//! - [`middleware`] - Axum 中间件封装

pub mod access;
pub mod jwt;
pub mod middleware;
pub mod tokens;

pub use access::{AccessRequirement, CurrentUser, check_access, check_all, resolve_caller};
pub use jwt::{Claims, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_auth, require_permission, require_roles};
pub use tokens::TokenRegistry;
