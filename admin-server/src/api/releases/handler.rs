//! Release API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{
    Deployment, DeploymentCreate, DeploymentStatus, Release, ReleaseCreate, ReleasePriority,
    ReleaseStatus, ReleaseUpdate,
};
use shared::request::{PageQuery, SortOrder};
use shared::{ApiResponse, PaginatedResponse};

use crate::core::AppState;
use crate::releases::service;
use crate::releases::{DeploymentFilters, ReleaseFilters};
use crate::utils::AppResult;

/// 版本列表查询参数
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<ReleaseStatus>,
    pub priority: Option<ReleasePriority>,
    pub developer: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

/// GET /api/versions - 版本列表 (筛选 + 排序 + 分页)
pub async fn list_releases(
    State(state): State<AppState>,
    Query(query): Query<ReleaseListQuery>,
) -> AppResult<ApiResponse<PaginatedResponse<Release>>> {
    let page = PageQuery {
        page: query.page,
        limit: query.limit,
    };
    let filters = ReleaseFilters {
        status: query.status,
        priority: query.priority,
        developer: query.developer,
    };
    let result = service::list_releases(
        &state.db,
        &filters,
        query.sort_by.as_deref().unwrap_or("createdAt"),
        query.sort_order.unwrap_or(SortOrder::Desc),
        page.page(),
        page.limit(),
    )
    .await;
    Ok(ApiResponse::ok(result))
}

/// GET /api/versions/{id} - 单个版本
pub async fn get_release(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<ApiResponse<Release>> {
    Ok(ApiResponse::ok(service::get_release(&state.db, id).await?))
}

/// POST /api/versions - 创建版本
pub async fn create_release(
    State(state): State<AppState>,
    Json(payload): Json<ReleaseCreate>,
) -> AppResult<ApiResponse<Release>> {
    let release = service::create_release(&state.db, payload).await?;
    Ok(ApiResponse::ok_with_message(release, "Release created"))
}

/// PUT /api/versions/{id} - 更新版本
pub async fn update_release(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<ReleaseUpdate>,
) -> AppResult<ApiResponse<Release>> {
    let release = service::update_release(&state.db, id, payload).await?;
    Ok(ApiResponse::ok_with_message(release, "Release updated"))
}

/// DELETE /api/versions/{id} - 删除版本 (已发布的不可删除)
pub async fn delete_release(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<ApiResponse<()>> {
    service::delete_release(&state.db, id).await?;
    Ok(ApiResponse::message("Release deleted"))
}

/// 回滚请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollbackRequest {
    pub rollback_version: String,
}

/// POST /api/versions/{id}/rollback - 版本回滚
pub async fn rollback_release(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<RollbackRequest>,
) -> AppResult<ApiResponse<Release>> {
    let release = service::rollback_release(&state.db, id, &payload.rollback_version).await?;
    Ok(ApiResponse::ok_with_message(release, "Release rolled back"))
}

/// 部署列表查询参数
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub environment: Option<String>,
    pub status: Option<DeploymentStatus>,
    pub version: Option<String>,
    pub sort_order: Option<SortOrder>,
}

/// GET /api/versions/deployments/list - 部署列表
pub async fn list_deployments(
    State(state): State<AppState>,
    Query(query): Query<DeploymentListQuery>,
) -> AppResult<ApiResponse<PaginatedResponse<Deployment>>> {
    let page = PageQuery {
        page: query.page,
        limit: query.limit,
    };
    let filters = DeploymentFilters {
        environment: query.environment,
        status: query.status,
        version: query.version,
    };
    let result = service::list_deployments(
        &state.db,
        &filters,
        query.sort_order.unwrap_or(SortOrder::Desc),
        page.page(),
        page.limit(),
    )
    .await;
    Ok(ApiResponse::ok(result))
}

/// POST /api/versions/deployments - 创建部署任务
pub async fn create_deployment(
    State(state): State<AppState>,
    Json(payload): Json<DeploymentCreate>,
) -> AppResult<ApiResponse<Deployment>> {
    let deployment = service::create_deployment(&state.db, payload).await?;
    Ok(ApiResponse::ok_with_message(deployment, "Deployment created"))
}
