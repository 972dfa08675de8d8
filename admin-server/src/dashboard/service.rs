//! 仪表板服务

use serde::Deserialize;
use shared::PaginatedResponse;
use shared::models::{AccountApplication, ApplicationStatus, DashboardOverview, StatCard};
use shared::request::SortOrder;
use shared::{AppError, ErrorCode};

use crate::db::Database;
use crate::utils::AppResult;

/// 账号申请列表筛选条件
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationFilters {
    pub status: Option<ApplicationStatus>,
    pub region: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// 统计卡片
pub async fn statistics(db: &Database) -> Vec<StatCard> {
    let store = db.dashboard.read().await;
    store.cards.clone()
}

/// 账号申请列表 (筛选 + 按申请时间排序 + 分页)
pub async fn list_applications(
    db: &Database,
    filters: &ApplicationFilters,
    order: SortOrder,
    page: u32,
    limit: u32,
) -> PaginatedResponse<AccountApplication> {
    let store = db.dashboard.read().await;
    let mut applications: Vec<AccountApplication> = store
        .applications
        .iter()
        .filter(|a| filters.status.is_none_or(|s| a.status == s))
        .filter(|a| filters.region.as_ref().is_none_or(|r| &a.region == r))
        .filter(|a| filters.kind.as_ref().is_none_or(|k| &a.kind == k))
        .cloned()
        .collect();
    applications.sort_by(|a, b| match order {
        SortOrder::Asc => a.create_time.cmp(&b.create_time),
        SortOrder::Desc => b.create_time.cmp(&a.create_time),
    });
    PaginatedResponse::paginate(applications, page, limit)
}

/// 更新申请状态
pub async fn update_application_status(
    db: &Database,
    id: u64,
    status: ApplicationStatus,
) -> AppResult<AccountApplication> {
    let mut store = db.dashboard.write().await;
    let application = store.application_mut(id).ok_or_else(|| {
        AppError::not_found(ErrorCode::ApplicationNotFound, format!("Application {id}"))
    })?;
    application.status = status;
    Ok(application.clone())
}

/// 仪表板概览
pub async fn overview(db: &Database) -> DashboardOverview {
    let store = db.dashboard.read().await;
    let count = |status: ApplicationStatus| {
        store
            .applications
            .iter()
            .filter(|a| a.status == status)
            .count() as u32
    };

    let mut recent: Vec<AccountApplication> = store.applications.clone();
    recent.sort_by(|a, b| b.create_time.cmp(&a.create_time));

    DashboardOverview {
        statistics: store.cards.clone(),
        total_applications: store.applications.len() as u32,
        pending_applications: count(ApplicationStatus::Pending),
        approved_applications: count(ApplicationStatus::Approved),
        rejected_applications: count(ApplicationStatus::Rejected),
        recent_applications: recent.into_iter().take(5).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_application_status_transition() {
        let db = Database::seeded();
        let updated = update_application_status(&db, 1, ApplicationStatus::Approved)
            .await
            .expect("update");
        assert_eq!(updated.status, ApplicationStatus::Approved);

        let err = update_application_status(&db, 999, ApplicationStatus::Approved)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ApplicationNotFound);
    }

    #[tokio::test]
    async fn test_overview_counts() {
        let db = Database::seeded();
        let overview = overview(&db).await;
        assert_eq!(overview.total_applications, 5);
        assert_eq!(overview.pending_applications, 2);
        assert_eq!(overview.approved_applications, 2);
        assert_eq!(overview.rejected_applications, 1);
        assert_eq!(overview.statistics.len(), 4);
        // 最近的申请排在最前
        assert_eq!(overview.recent_applications[0].id, 1);
    }

    #[tokio::test]
    async fn test_application_filters() {
        let db = Database::seeded();
        let page = list_applications(
            &db,
            &ApplicationFilters {
                status: Some(ApplicationStatus::Pending),
                ..Default::default()
            },
            SortOrder::Desc,
            1,
            10,
        )
        .await;
        assert_eq!(page.pagination.total, 2);
        assert!(
            page.items
                .iter()
                .all(|a| a.status == ApplicationStatus::Pending)
        );
    }
}
