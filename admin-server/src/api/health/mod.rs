//! Health API Module

use std::sync::OnceLock;
use std::time::Instant;

use axum::{Json, Router, routing::get};
use chrono::Utc;
use serde_json::json;

use crate::core::AppState;

static STARTED_AT: OnceLock<Instant> = OnceLock::new();

/// Health and service-info router
pub fn router() -> Router<AppState> {
    STARTED_AT.get_or_init(Instant::now);
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

/// GET /health - 健康检查
async fn health() -> Json<serde_json::Value> {
    let uptime = STARTED_AT
        .get()
        .map(|t| t.elapsed().as_secs())
        .unwrap_or(0);
    Json(json!({
        "success": true,
        "message": "Server is healthy",
        "timestamp": Utc::now(),
        "uptime": uptime,
    }))
}

/// GET / - 服务信息
async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "message": "CrmPlus API Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": "/api/auth",
            "members": "/api/members",
            "projects": "/api/projects",
            "versions": "/api/versions",
            "dashboard": "/api/dashboard",
            "health": "/health",
        },
    }))
}
