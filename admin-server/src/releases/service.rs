//! 版本与部署跟踪服务

use chrono::Utc;
use serde::Deserialize;
use shared::PaginatedResponse;
use shared::models::{
    Deployment, DeploymentCreate, DeploymentStatus, Release, ReleaseCreate, ReleasePriority,
    ReleaseStatus, ReleaseUpdate, TestStatus,
};
use shared::request::SortOrder;
use shared::{AppError, ErrorCode};

use crate::db::Database;
use crate::utils::AppResult;
use crate::utils::validation::{self, MAX_DESCRIPTION_LEN, MAX_NAME_LEN, validate_optional_text, validate_required_text};

/// 版本列表筛选条件 (具名字段精确匹配)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReleaseFilters {
    pub status: Option<ReleaseStatus>,
    pub priority: Option<ReleasePriority>,
    pub developer: Option<String>,
}

/// 部署列表筛选条件
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeploymentFilters {
    pub environment: Option<String>,
    pub status: Option<DeploymentStatus>,
    pub version: Option<String>,
}

fn check_version(version: &str) -> AppResult<()> {
    if validation::is_valid_version(version) {
        Ok(())
    } else {
        Err(AppError::new(ErrorCode::VersionFormatInvalid))
    }
}

fn sort_releases(releases: &mut [Release], sort_by: &str, order: SortOrder) {
    releases.sort_by(|a, b| {
        let ordering = match sort_by {
            "releaseDate" => a.release_date.cmp(&b.release_date),
            "version" => a.version.cmp(&b.version),
            "updatedAt" => a.updated_at.cmp(&b.updated_at),
            _ => a.created_at.cmp(&b.created_at),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// 获取版本列表 (筛选 + 排序 + 分页)
pub async fn list_releases(
    db: &Database,
    filters: &ReleaseFilters,
    sort_by: &str,
    order: SortOrder,
    page: u32,
    limit: u32,
) -> PaginatedResponse<Release> {
    let store = db.releases.read().await;
    let mut releases: Vec<Release> = store
        .releases
        .iter()
        .filter(|r| filters.status.is_none_or(|s| r.status == s))
        .filter(|r| filters.priority.is_none_or(|p| r.priority == p))
        .filter(|r| filters.developer.as_ref().is_none_or(|d| &r.developer == d))
        .cloned()
        .collect();
    sort_releases(&mut releases, sort_by, order);
    PaginatedResponse::paginate(releases, page, limit)
}

/// 获取单个版本
pub async fn get_release(db: &Database, id: u64) -> AppResult<Release> {
    let store = db.releases.read().await;
    store
        .release(id)
        .cloned()
        .ok_or_else(|| AppError::not_found(ErrorCode::ReleaseNotFound, format!("Release {id}")))
}

/// 创建版本
pub async fn create_release(db: &Database, data: ReleaseCreate) -> AppResult<Release> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&data.developer, "developer", MAX_NAME_LEN)?;
    validate_optional_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;
    check_version(&data.version)?;

    let mut store = db.releases.write().await;
    if store.release_by_version(&data.version).is_some() {
        return Err(AppError::new(ErrorCode::VersionExists));
    }

    let now = Utc::now();
    let release = Release {
        id: store.next_release_id(),
        version: data.version,
        name: data.name,
        description: data.description.unwrap_or_default(),
        release_date: data.release_date,
        status: ReleaseStatus::InDevelopment,
        priority: data.priority.unwrap_or(ReleasePriority::Medium),
        developer: data.developer,
        test_status: TestStatus::NotTested,
        rollback_version: None,
        created_at: now,
        updated_at: now,
    };
    store.releases.push(release.clone());

    tracing::info!(release_id = release.id, version = %release.version, "release created");
    Ok(release)
}

/// 更新版本
pub async fn update_release(db: &Database, id: u64, data: ReleaseUpdate) -> AppResult<Release> {
    let mut store = db.releases.write().await;

    if let Some(version) = &data.version {
        check_version(version)?;
        if store
            .releases
            .iter()
            .any(|r| r.id != id && &r.version == version)
        {
            return Err(AppError::new(ErrorCode::VersionExists));
        }
    }

    let entry = store
        .release_mut(id)
        .ok_or_else(|| AppError::not_found(ErrorCode::ReleaseNotFound, format!("Release {id}")))?;

    if let Some(version) = data.version {
        entry.version = version;
    }
    if let Some(name) = data.name {
        entry.name = name;
    }
    if let Some(description) = data.description {
        entry.description = description;
    }
    if let Some(release_date) = data.release_date {
        entry.release_date = release_date;
    }
    if let Some(status) = data.status {
        entry.status = status;
    }
    if let Some(priority) = data.priority {
        entry.priority = priority;
    }
    if let Some(developer) = data.developer {
        entry.developer = developer;
    }
    if let Some(test_status) = data.test_status {
        entry.test_status = test_status;
    }
    entry.updated_at = Utc::now();

    Ok(entry.clone())
}

/// 删除版本；已发布的版本不可删除
pub async fn delete_release(db: &Database, id: u64) -> AppResult<()> {
    let mut store = db.releases.write().await;
    let index = store
        .releases
        .iter()
        .position(|r| r.id == id)
        .ok_or_else(|| AppError::not_found(ErrorCode::ReleaseNotFound, format!("Release {id}")))?;

    if store.releases[index].status == ReleaseStatus::Released {
        return Err(AppError::new(ErrorCode::ReleasePublished));
    }

    store.releases.remove(index);
    tracing::info!(release_id = id, "release deleted");
    Ok(())
}

/// 版本回滚；目标版本必须存在
pub async fn rollback_release(
    db: &Database,
    id: u64,
    rollback_version: &str,
) -> AppResult<Release> {
    let mut store = db.releases.write().await;

    if store.release(id).is_none() {
        return Err(AppError::not_found(
            ErrorCode::ReleaseNotFound,
            format!("Release {id}"),
        ));
    }
    if store.release_by_version(rollback_version).is_none() {
        return Err(AppError::with_message(
            ErrorCode::RollbackTargetMissing,
            format!("Rollback target {rollback_version} does not exist"),
        ));
    }

    let entry = store
        .release_mut(id)
        .ok_or_else(|| AppError::not_found(ErrorCode::ReleaseNotFound, format!("Release {id}")))?;
    entry.status = ReleaseStatus::RolledBack;
    entry.rollback_version = Some(rollback_version.to_string());
    entry.updated_at = Utc::now();

    tracing::info!(release_id = id, rollback_version, "release rolled back");
    Ok(entry.clone())
}

/// 获取部署列表 (筛选 + 排序 + 分页)
pub async fn list_deployments(
    db: &Database,
    filters: &DeploymentFilters,
    order: SortOrder,
    page: u32,
    limit: u32,
) -> PaginatedResponse<Deployment> {
    let store = db.releases.read().await;
    let mut deployments: Vec<Deployment> = store
        .deployments
        .iter()
        .filter(|d| {
            filters
                .environment
                .as_ref()
                .is_none_or(|e| &d.environment == e)
        })
        .filter(|d| filters.status.is_none_or(|s| d.status == s))
        .filter(|d| filters.version.as_ref().is_none_or(|v| &d.version == v))
        .cloned()
        .collect();
    deployments.sort_by(|a, b| match order {
        SortOrder::Asc => a.deploy_time.cmp(&b.deploy_time),
        SortOrder::Desc => b.deploy_time.cmp(&a.deploy_time),
    });
    PaginatedResponse::paginate(deployments, page, limit)
}

/// 创建部署任务；部署的版本必须已登记
pub async fn create_deployment(db: &Database, data: DeploymentCreate) -> AppResult<Deployment> {
    validate_required_text(&data.environment, "environment", MAX_NAME_LEN)?;
    validate_required_text(&data.operator, "operator", MAX_NAME_LEN)?;

    let mut store = db.releases.write().await;
    if store.release_by_version(&data.version).is_none() {
        return Err(AppError::not_found(
            ErrorCode::ReleaseNotFound,
            format!("Release {}", data.version),
        ));
    }

    let now = Utc::now();
    let deployment = Deployment {
        id: store.next_deployment_id(),
        environment: data.environment,
        version: data.version,
        deploy_time: now,
        status: DeploymentStatus::InProgress,
        progress: 0,
        operator: data.operator,
        duration: "0m".to_string(),
        logs: vec!["Starting deployment...".to_string()],
        created_at: now,
        updated_at: now,
    };
    store.deployments.push(deployment.clone());

    tracing::info!(
        deployment_id = deployment.id,
        version = %deployment.version,
        environment = %deployment.environment,
        "deployment created"
    );
    Ok(deployment)
}
