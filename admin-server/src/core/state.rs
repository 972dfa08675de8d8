use std::sync::Arc;

use crate::auth::{JwtService, TokenRegistry};
use crate::core::Config;
use crate::db::Database;

/// 服务器状态 - 持有所有服务的单例引用
///
/// AppState 是管理后台的核心数据结构，持有所有服务的共享引用。
/// 使用 Arc 实现浅拷贝，克隆成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Arc<Database> | 内存数据存储 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
/// | tokens | Arc<TokenRegistry> | 活跃令牌注册表 |
#[derive(Clone)]
pub struct AppState {
    /// 服务器配置
    pub config: Config,
    /// 内存数据存储
    pub db: Arc<Database>,
    /// JWT 认证服务
    pub jwt_service: Arc<JwtService>,
    /// 活跃令牌注册表
    pub tokens: Arc<TokenRegistry>,
}

impl AppState {
    /// 初始化服务器状态 (载入演示数据)
    pub fn initialize(config: &Config) -> Self {
        Self::with_database(config.clone(), Database::seeded())
    }

    /// 使用指定数据存储创建状态 (测试用)
    pub fn with_database(config: Config, db: Database) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config,
            db: Arc::new(db),
            jwt_service,
            tokens: Arc::new(TokenRegistry::new()),
        }
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
