//! 项目统计与仪表板聚合

use serde::Serialize;
use shared::models::{
    Activity, ActivityKind, CodeQualityStats, Milestone, MilestoneStatus, Project, ProjectStats,
    ProjectStatus, ReviewStatus,
};

use crate::db::Database;

/// 项目统计 + 代码质量 + 最近活动
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatistics {
    pub projects: ProjectStats,
    pub code_quality: CodeQualityStats,
    pub recent_activities: Vec<Activity>,
}

/// 开发仪表板聚合
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDashboard {
    pub overview: ProjectStats,
    pub code_quality: CodeQualityStats,
    pub recent_activities: Vec<Activity>,
    pub projects: Vec<Project>,
    pub milestones: Vec<Milestone>,
}

fn project_stats(projects: &[Project]) -> ProjectStats {
    let total_tasks: u32 = projects.iter().map(|p| p.tasks.total).sum();
    let completed_tasks: u32 = projects.iter().map(|p| p.tasks.completed).sum();
    ProjectStats {
        total_projects: projects.len() as u32,
        active_projects: projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Active)
            .count() as u32,
        completed_projects: projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Completed)
            .count() as u32,
        total_team_members: projects.iter().map(|p| p.team_members).sum(),
        total_tasks,
        completed_tasks,
        completion_rate: if total_tasks > 0 {
            (completed_tasks as f64 / total_tasks as f64 * 100.0).round() as u32
        } else {
            0
        },
    }
}

fn code_quality(store: &crate::db::ProjectStore) -> CodeQualityStats {
    let reviews: Vec<_> = store.code_reviews.list();
    CodeQualityStats {
        code_coverage: 85,
        bug_count: 12,
        code_quality_score: "A+".to_string(),
        total_reviews: reviews.len() as u32,
        pending_reviews: reviews
            .iter()
            .filter(|r| r.status == ReviewStatus::Pending)
            .count() as u32,
        approved_reviews: reviews
            .iter()
            .filter(|r| r.status == ReviewStatus::Approved)
            .count() as u32,
    }
}

/// 从代码审查流水推导最近活动，按时间倒序
fn recent_activities(store: &crate::db::ProjectStore) -> Vec<Activity> {
    let mut activities: Vec<Activity> = Vec::new();
    for review in store.code_reviews.values() {
        activities.push(Activity {
            id: format!("{}-submitted", review.id),
            title: format!("{} submitted \"{}\" for review", review.author, review.title),
            kind: ActivityKind::CodeReview,
            author: review.author.clone(),
            project_id: review.project_id.clone(),
            created_at: review.created_at,
        });
        if let Some(approved_at) = review.approved_at {
            activities.push(Activity {
                id: format!("{}-approved", review.id),
                title: format!("{} approved \"{}\"", review.reviewer, review.title),
                kind: ActivityKind::Approval,
                author: review.reviewer.clone(),
                project_id: review.project_id.clone(),
                created_at: approved_at,
            });
        }
    }
    activities.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
    activities.truncate(10);
    activities
}

/// 项目统计信息
pub async fn statistics(db: &Database) -> ProjectStatistics {
    let store = db.projects.read().await;
    let projects = store.projects.list();
    ProjectStatistics {
        projects: project_stats(&projects),
        code_quality: code_quality(&store),
        recent_activities: recent_activities(&store),
    }
}

/// 开发仪表板数据
pub async fn dashboard(db: &Database) -> ProjectDashboard {
    let store = db.projects.read().await;
    let projects = store.projects.list();
    let overview = project_stats(&projects);

    let milestones = store
        .milestones
        .list()
        .into_iter()
        .filter(|m| m.status == MilestoneStatus::Active)
        .take(3)
        .collect();

    ProjectDashboard {
        overview,
        code_quality: code_quality(&store),
        recent_activities: recent_activities(&store).into_iter().take(5).collect(),
        projects: projects.into_iter().take(3).collect(),
        milestones,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_statistics_totals() {
        let db = Database::seeded();
        let stats = statistics(&db).await;

        assert_eq!(stats.projects.total_projects, 3);
        assert_eq!(stats.projects.active_projects, 2);
        assert_eq!(stats.projects.completed_projects, 1);
        assert_eq!(stats.projects.total_tasks, 74);
        assert_eq!(stats.projects.completed_tasks, 50);
        assert_eq!(stats.projects.completion_rate, 68);

        assert_eq!(stats.code_quality.total_reviews, 3);
        assert_eq!(stats.code_quality.pending_reviews, 1);
        assert_eq!(stats.code_quality.approved_reviews, 1);

        // 每条审查产生提交活动，已通过的再产生一条通过活动
        assert_eq!(stats.recent_activities.len(), 4);
    }

    #[tokio::test]
    async fn test_dashboard_slices() {
        let db = Database::seeded();
        let board = dashboard(&db).await;
        assert!(board.projects.len() <= 3);
        assert!(board.milestones.len() <= 3);
        assert!(board.recent_activities.len() <= 5);
        assert!(
            board
                .milestones
                .iter()
                .all(|m| m.status == MilestoneStatus::Active)
        );
    }
}
