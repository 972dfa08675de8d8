//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查和服务信息
//! - [`auth`] - 认证相关接口
//! - [`members`] - 用户/角色/部门/权限/组织/统计接口
//! - [`projects`] - 项目/里程碑/代码审查/分支接口
//! - [`releases`] - 版本与部署接口 (挂载于 /api/versions)
//! - [`dashboard`] - 仪表板接口

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod members;
pub mod projects;
pub mod releases;
