//! Dashboard API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{AccountApplication, ApplicationStatus, DashboardOverview, StatCard};
use shared::request::{PageQuery, SortOrder};
use shared::{ApiResponse, PaginatedResponse};

use crate::core::AppState;
use crate::dashboard::ApplicationFilters;
use crate::dashboard::service;
use crate::utils::AppResult;

/// GET /api/dashboard/statistics - 统计卡片
pub async fn statistics(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<StatCard>>> {
    Ok(ApiResponse::ok(service::statistics(&state.db).await))
}

/// 账号申请列表查询参数
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<ApplicationStatus>,
    pub region: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub sort_order: Option<SortOrder>,
}

/// GET /api/dashboard/applications - 账号申请列表
pub async fn list_applications(
    State(state): State<AppState>,
    Query(query): Query<ApplicationListQuery>,
) -> AppResult<ApiResponse<PaginatedResponse<AccountApplication>>> {
    let page = PageQuery {
        page: query.page,
        limit: query.limit,
    };
    let filters = ApplicationFilters {
        status: query.status,
        region: query.region,
        kind: query.kind,
    };
    let result = service::list_applications(
        &state.db,
        &filters,
        query.sort_order.unwrap_or(SortOrder::Desc),
        page.page(),
        page.limit(),
    )
    .await;
    Ok(ApiResponse::ok(result))
}

/// 申请状态更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ApplicationStatus,
}

/// PUT /api/dashboard/applications/{id}/status - 更新申请状态
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<ApiResponse<AccountApplication>> {
    let application = service::update_application_status(&state.db, id, payload.status).await?;
    Ok(ApiResponse::ok_with_message(application, "Status updated"))
}

/// GET /api/dashboard/overview - 仪表板概览
pub async fn overview(State(state): State<AppState>) -> AppResult<ApiResponse<DashboardOverview>> {
    Ok(ApiResponse::ok(service::overview(&state.db).await))
}
