//! Server Implementation
//!
//! HTTP 服务器组装和启动

use axum::{Router, middleware};
use http::HeaderValue;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::method::Method;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::auth::require_auth;
use crate::core::{AppState, Config};

/// 组装完整路由
///
/// 所有 `/api/` 路由 (除登录外) 经过认证中间件；集成测试直接驱动这里
/// 返回的 Router。
pub fn build_router(state: AppState) -> Router {
    let allowed_origin = state
        .config
        .cors_origin
        .parse::<HeaderValue>()
        .unwrap_or_else(|_| HeaderValue::from_static("http://localhost:5173"));

    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    Router::new()
        .merge(api::health::router())
        .merge(api::auth::router())
        .merge(api::members::router())
        .merge(api::projects::router())
        .merge(api::releases::router())
        .merge(api::dashboard::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<AppState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state (for sharing with tests/tools)
    pub fn with_state(config: Config, state: AppState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        let state = match &self.state {
            Some(s) => s.clone(),
            None => AppState::initialize(&self.config),
        };

        let router = build_router(state);

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("CrmPlus admin server starting on {}", addr);
        tracing::info!("  environment : {}", self.config.environment);
        tracing::info!("  api root    : http://localhost:{}/api", self.config.http_port);
        tracing::info!("  health      : http://localhost:{}/health", self.config.http_port);

        let listener = tokio::net::TcpListener::bind(addr).await?;

        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutting down...");
            })
            .await?;

        Ok(())
    }
}
