//! 成员管理子系统
//!
//! 用户/角色/部门的增删改查，以及支撑它们的三个核心组件：
//!
//! - [`integrity`] - 引用完整性检查 (唯一性、外键、层级、环)
//! - [`propagation`] - 变更传播 (权限扇出、改名扇出、派生计数)
//! - [`tree`] - 权限树构建
//!
//! 每个变更操作在目录写锁内完成「检查 → 写入 → 传播」，检查与写入之间
//! 不存在竞态窗口。

pub mod departments;
pub mod integrity;
pub mod propagation;
pub mod roles;
pub mod statistics;
pub mod tree;
pub mod users;

pub use tree::build_permission_tree;
pub use users::UserFilters;
