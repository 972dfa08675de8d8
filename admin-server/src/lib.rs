//! CrmPlus Admin Server - 内部 CRM/管理后台的 REST 服务
//!
//! # 架构概述
//!
//! - **认证** (`auth`): JWT + Argon2 认证，活跃令牌注册表，访问决策
//! - **存储** (`db`): 锁保护的内存数据存储 (id 键表 + 种子数据)
//! - **成员管理** (`members`): 用户/角色/部门与 RBAC 核心
//! - **项目跟踪** (`projects`): 项目/里程碑/代码审查/分支
//! - **版本跟踪** (`releases`): 版本与部署
//! - **仪表板** (`dashboard`): 统计卡片与账号申请
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! admin-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、令牌注册表、访问决策
//! ├── db/            # 内存存储层
//! ├── members/       # 成员管理 (完整性检查、传播、权限树)
//! ├── projects/      # 项目跟踪
//! ├── releases/      # 版本与部署跟踪
//! ├── dashboard/     # 仪表板
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod dashboard;
pub mod db;
pub mod members;
pub mod projects;
pub mod releases;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService, TokenRegistry};
pub use core::{AppState, Config, Server, build_router};
pub use db::Database;
pub use utils::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
