//! Project API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::ApiResponse;
use shared::models::{
    Branch, BranchCreate, BranchUpdate, CodeReview, CodeReviewCreate, CodeReviewUpdate, Milestone,
    MilestoneCreate, MilestoneUpdate, Project, ProjectCreate, ProjectUpdate,
};

use crate::core::AppState;
use crate::projects::{ProjectDashboard, ProjectStatistics, service, statistics};
use crate::utils::AppResult;

/// 依赖项目的资源的列表查询参数
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectScopeQuery {
    pub project_id: Option<String>,
}

// ==================== 项目 ====================

/// GET /api/projects/projects - 项目列表
pub async fn list_projects(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<Project>>> {
    Ok(ApiResponse::ok(service::list_projects(&state.db).await))
}

/// GET /api/projects/projects/{id} - 单个项目
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Project>> {
    Ok(ApiResponse::ok(service::get_project(&state.db, &id).await?))
}

/// POST /api/projects/projects - 创建项目
pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<ProjectCreate>,
) -> AppResult<ApiResponse<Project>> {
    let project = service::create_project(&state.db, payload).await?;
    Ok(ApiResponse::ok_with_message(project, "Project created"))
}

/// PUT /api/projects/projects/{id} - 更新项目
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ProjectUpdate>,
) -> AppResult<ApiResponse<Project>> {
    let project = service::update_project(&state.db, &id, payload).await?;
    Ok(ApiResponse::ok_with_message(project, "Project updated"))
}

/// DELETE /api/projects/projects/{id} - 删除项目 (级联清理依赖数据)
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    service::delete_project(&state.db, &id).await?;
    Ok(ApiResponse::message("Project deleted"))
}

// ==================== 里程碑 ====================

/// GET /api/projects/milestones - 里程碑列表 (?projectId= 过滤)
pub async fn list_milestones(
    State(state): State<AppState>,
    Query(query): Query<ProjectScopeQuery>,
) -> AppResult<ApiResponse<Vec<Milestone>>> {
    Ok(ApiResponse::ok(
        service::list_milestones(&state.db, query.project_id.as_deref()).await,
    ))
}

/// POST /api/projects/milestones - 创建里程碑
pub async fn create_milestone(
    State(state): State<AppState>,
    Json(payload): Json<MilestoneCreate>,
) -> AppResult<ApiResponse<Milestone>> {
    let milestone = service::create_milestone(&state.db, payload).await?;
    Ok(ApiResponse::ok_with_message(milestone, "Milestone created"))
}

/// PUT /api/projects/milestones/{id} - 更新里程碑
pub async fn update_milestone(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<MilestoneUpdate>,
) -> AppResult<ApiResponse<Milestone>> {
    let milestone = service::update_milestone(&state.db, &id, payload).await?;
    Ok(ApiResponse::ok_with_message(milestone, "Milestone updated"))
}

/// DELETE /api/projects/milestones/{id} - 删除里程碑
pub async fn delete_milestone(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    service::delete_milestone(&state.db, &id).await?;
    Ok(ApiResponse::message("Milestone deleted"))
}

// ==================== 代码审查 ====================

/// GET /api/projects/code-reviews - 审查列表 (?projectId= 过滤)
pub async fn list_code_reviews(
    State(state): State<AppState>,
    Query(query): Query<ProjectScopeQuery>,
) -> AppResult<ApiResponse<Vec<CodeReview>>> {
    Ok(ApiResponse::ok(
        service::list_code_reviews(&state.db, query.project_id.as_deref()).await,
    ))
}

/// GET /api/projects/code-reviews/{id} - 单个审查
pub async fn get_code_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<CodeReview>> {
    Ok(ApiResponse::ok(
        service::get_code_review(&state.db, &id).await?,
    ))
}

/// POST /api/projects/code-reviews - 创建审查
pub async fn create_code_review(
    State(state): State<AppState>,
    Json(payload): Json<CodeReviewCreate>,
) -> AppResult<ApiResponse<CodeReview>> {
    let review = service::create_code_review(&state.db, payload).await?;
    Ok(ApiResponse::ok_with_message(review, "Code review created"))
}

/// PUT /api/projects/code-reviews/{id} - 更新审查
pub async fn update_code_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CodeReviewUpdate>,
) -> AppResult<ApiResponse<CodeReview>> {
    let review = service::update_code_review(&state.db, &id, payload).await?;
    Ok(ApiResponse::ok_with_message(review, "Code review updated"))
}

/// DELETE /api/projects/code-reviews/{id} - 删除审查
pub async fn delete_code_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    service::delete_code_review(&state.db, &id).await?;
    Ok(ApiResponse::message("Code review deleted"))
}

// ==================== 分支 ====================

/// GET /api/projects/branches - 分支列表 (?projectId= 过滤)
pub async fn list_branches(
    State(state): State<AppState>,
    Query(query): Query<ProjectScopeQuery>,
) -> AppResult<ApiResponse<Vec<Branch>>> {
    Ok(ApiResponse::ok(
        service::list_branches(&state.db, query.project_id.as_deref()).await,
    ))
}

/// POST /api/projects/branches - 创建分支
pub async fn create_branch(
    State(state): State<AppState>,
    Json(payload): Json<BranchCreate>,
) -> AppResult<ApiResponse<Branch>> {
    let branch = service::create_branch(&state.db, payload).await?;
    Ok(ApiResponse::ok_with_message(branch, "Branch created"))
}

/// PUT /api/projects/branches/{id} - 更新分支
pub async fn update_branch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<BranchUpdate>,
) -> AppResult<ApiResponse<Branch>> {
    let branch = service::update_branch(&state.db, &id, payload).await?;
    Ok(ApiResponse::ok_with_message(branch, "Branch updated"))
}

/// DELETE /api/projects/branches/{id} - 删除分支
pub async fn delete_branch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    service::delete_branch(&state.db, &id).await?;
    Ok(ApiResponse::message("Branch deleted"))
}

// ==================== 统计 ====================

/// GET /api/projects/statistics - 项目统计
pub async fn project_statistics(
    State(state): State<AppState>,
) -> AppResult<ApiResponse<ProjectStatistics>> {
    Ok(ApiResponse::ok(statistics::statistics(&state.db).await))
}

/// GET /api/projects/dashboard - 开发仪表板
pub async fn project_dashboard(
    State(state): State<AppState>,
) -> AppResult<ApiResponse<ProjectDashboard>> {
    Ok(ApiResponse::ok(statistics::dashboard(&state.db).await))
}
