//! 项目跟踪服务
//!
//! 项目、里程碑、代码审查、分支的增删改查。删除项目会级联清理它名下的
//! 里程碑、审查和分支。

use chrono::{Duration, Utc};
use shared::models::{
    Branch, BranchCreate, BranchKind, BranchStatus, BranchUpdate, CodeReview, CodeReviewCreate,
    CodeReviewUpdate, Milestone, MilestoneCreate, MilestoneStatus, MilestoneUpdate, Project,
    ProjectCreate, ProjectStatus, ProjectUpdate, ReviewStatus, TaskSummary,
};
use shared::{AppError, ErrorCode};
use uuid::Uuid;

use crate::db::Database;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN, validate_name, validate_optional_text, validate_required_text};

// ==================== 项目 ====================

/// 获取项目列表
pub async fn list_projects(db: &Database) -> Vec<Project> {
    let store = db.projects.read().await;
    store.projects.list()
}

/// 获取单个项目
pub async fn get_project(db: &Database, id: &str) -> AppResult<Project> {
    let store = db.projects.read().await;
    store
        .projects
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::not_found(ErrorCode::ProjectNotFound, format!("Project {id}")))
}

/// 创建项目
pub async fn create_project(db: &Database, data: ProjectCreate) -> AppResult<Project> {
    validate_name(&data.name, "name")?;
    validate_optional_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;

    let mut store = db.projects.write().await;
    let now = Utc::now();
    let start_date = data.start_date.unwrap_or_else(|| now.date_naive());
    let end_date = data
        .end_date
        .unwrap_or_else(|| (now + Duration::days(90)).date_naive());

    let project = Project {
        id: Uuid::new_v4().to_string(),
        name: data.name,
        description: data.description.unwrap_or_default(),
        progress: 0,
        status: ProjectStatus::Planning,
        start_date,
        end_date,
        team_members: data.team_members.unwrap_or(1),
        tasks: TaskSummary::default(),
        created_at: now,
        updated_at: now,
        created_by: data.created_by.unwrap_or_else(|| "admin".to_string()),
        tags: data.tags.unwrap_or_default(),
    };
    store.projects.insert(project.clone());

    tracing::info!(project_id = %project.id, "project created");
    Ok(project)
}

/// 更新项目
pub async fn update_project(db: &Database, id: &str, data: ProjectUpdate) -> AppResult<Project> {
    if let Some(name) = &data.name {
        validate_name(name, "name")?;
    }
    validate_optional_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;

    let mut store = db.projects.write().await;
    let entry = store
        .projects
        .get_mut(id)
        .ok_or_else(|| AppError::not_found(ErrorCode::ProjectNotFound, format!("Project {id}")))?;

    if let Some(name) = data.name {
        entry.name = name;
    }
    if let Some(description) = data.description {
        entry.description = description;
    }
    if let Some(progress) = data.progress {
        entry.progress = progress.min(100);
    }
    if let Some(status) = data.status {
        entry.status = status;
    }
    if let Some(start_date) = data.start_date {
        entry.start_date = start_date;
    }
    if let Some(end_date) = data.end_date {
        entry.end_date = end_date;
    }
    if let Some(team_members) = data.team_members {
        entry.team_members = team_members;
    }
    if let Some(tasks) = data.tasks {
        entry.tasks = tasks;
    }
    if let Some(tags) = data.tags {
        entry.tags = tags;
    }
    entry.updated_at = Utc::now();

    Ok(entry.clone())
}

/// 删除项目，并级联删除其里程碑、代码审查和分支
pub async fn delete_project(db: &Database, id: &str) -> AppResult<()> {
    let mut store = db.projects.write().await;
    if store.projects.remove(id).is_none() {
        return Err(AppError::not_found(
            ErrorCode::ProjectNotFound,
            format!("Project {id}"),
        ));
    }

    let milestone_ids: Vec<String> = store
        .milestones
        .values()
        .filter(|m| m.project_id == id)
        .map(|m| m.id.clone())
        .collect();
    for mid in &milestone_ids {
        store.milestones.remove(mid);
    }
    let review_ids: Vec<String> = store
        .code_reviews
        .values()
        .filter(|r| r.project_id == id)
        .map(|r| r.id.clone())
        .collect();
    for rid in &review_ids {
        store.code_reviews.remove(rid);
    }
    let branch_ids: Vec<String> = store
        .branches
        .values()
        .filter(|b| b.project_id == id)
        .map(|b| b.id.clone())
        .collect();
    for bid in &branch_ids {
        store.branches.remove(bid);
    }

    tracing::info!(
        project_id = %id,
        milestones = milestone_ids.len(),
        reviews = review_ids.len(),
        branches = branch_ids.len(),
        "project deleted with dependents"
    );
    Ok(())
}

// ==================== 里程碑 ====================

/// 获取里程碑列表，可按项目过滤
pub async fn list_milestones(db: &Database, project_id: Option<&str>) -> Vec<Milestone> {
    let store = db.projects.read().await;
    store
        .milestones
        .list()
        .into_iter()
        .filter(|m| project_id.is_none_or(|p| m.project_id == p))
        .collect()
}

/// 创建里程碑
pub async fn create_milestone(db: &Database, data: MilestoneCreate) -> AppResult<Milestone> {
    validate_required_text(&data.title, "title", MAX_NAME_LEN)?;
    validate_optional_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;

    let mut store = db.projects.write().await;
    if !store.projects.contains(&data.project_id) {
        return Err(AppError::not_found(
            ErrorCode::ProjectNotFound,
            format!("Project {}", data.project_id),
        ));
    }

    let now = Utc::now();
    let milestone = Milestone {
        id: Uuid::new_v4().to_string(),
        title: data.title,
        description: data.description.unwrap_or_default(),
        due_date: data.due_date,
        status: MilestoneStatus::NotStarted,
        progress: 0,
        project_id: data.project_id,
        created_at: now,
        updated_at: now,
        completed_at: None,
        assigned_to: data.assigned_to,
    };
    store.milestones.insert(milestone.clone());
    Ok(milestone)
}

/// 更新里程碑；首次转入已完成时记录完成时间
pub async fn update_milestone(db: &Database, id: &str, data: MilestoneUpdate) -> AppResult<Milestone> {
    if let Some(title) = &data.title {
        validate_required_text(title, "title", MAX_NAME_LEN)?;
    }

    let mut store = db.projects.write().await;
    let entry = store
        .milestones
        .get_mut(id)
        .ok_or_else(|| AppError::not_found(ErrorCode::MilestoneNotFound, format!("Milestone {id}")))?;

    let now = Utc::now();
    if let Some(status) = data.status {
        if status == MilestoneStatus::Completed && entry.status != MilestoneStatus::Completed {
            entry.completed_at = Some(now);
        }
        entry.status = status;
    }
    if let Some(title) = data.title {
        entry.title = title;
    }
    if let Some(description) = data.description {
        entry.description = description;
    }
    if let Some(due_date) = data.due_date {
        entry.due_date = due_date;
    }
    if let Some(progress) = data.progress {
        entry.progress = progress.min(100);
    }
    if let Some(assigned_to) = data.assigned_to {
        entry.assigned_to = Some(assigned_to);
    }
    entry.updated_at = now;

    Ok(entry.clone())
}

/// 删除里程碑
pub async fn delete_milestone(db: &Database, id: &str) -> AppResult<()> {
    let mut store = db.projects.write().await;
    store
        .milestones
        .remove(id)
        .map(|_| ())
        .ok_or_else(|| AppError::not_found(ErrorCode::MilestoneNotFound, format!("Milestone {id}")))
}

// ==================== 代码审查 ====================

/// 获取代码审查列表
pub async fn list_code_reviews(db: &Database, project_id: Option<&str>) -> Vec<CodeReview> {
    let store = db.projects.read().await;
    store
        .code_reviews
        .list()
        .into_iter()
        .filter(|r| project_id.is_none_or(|p| r.project_id == p))
        .collect()
}

/// 获取单个代码审查
pub async fn get_code_review(db: &Database, id: &str) -> AppResult<CodeReview> {
    let store = db.projects.read().await;
    store
        .code_reviews
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::not_found(ErrorCode::CodeReviewNotFound, format!("Code review {id}")))
}

/// 创建代码审查
pub async fn create_code_review(db: &Database, data: CodeReviewCreate) -> AppResult<CodeReview> {
    validate_required_text(&data.title, "title", MAX_NAME_LEN)?;

    let mut store = db.projects.write().await;
    if !store.projects.contains(&data.project_id) {
        return Err(AppError::not_found(
            ErrorCode::ProjectNotFound,
            format!("Project {}", data.project_id),
        ));
    }

    let now = Utc::now();
    let review = CodeReview {
        id: Uuid::new_v4().to_string(),
        title: data.title,
        author: data.author,
        reviewer: data.reviewer,
        status: ReviewStatus::Pending,
        lines_changed: data.lines_changed.unwrap_or(0),
        comments: 0,
        project_id: data.project_id,
        branch_name: data.branch_name.unwrap_or_default(),
        commit_hash: data.commit_hash.unwrap_or_default(),
        description: data.description.unwrap_or_default(),
        files_changed: data.files_changed.unwrap_or_default(),
        created_at: now,
        updated_at: now,
        approved_at: None,
    };
    store.code_reviews.insert(review.clone());
    Ok(review)
}

/// 更新代码审查；首次通过时记录通过时间
pub async fn update_code_review(
    db: &Database,
    id: &str,
    data: CodeReviewUpdate,
) -> AppResult<CodeReview> {
    let mut store = db.projects.write().await;
    let entry = store
        .code_reviews
        .get_mut(id)
        .ok_or_else(|| AppError::not_found(ErrorCode::CodeReviewNotFound, format!("Code review {id}")))?;

    let now = Utc::now();
    if let Some(status) = data.status {
        if status == ReviewStatus::Approved && entry.status != ReviewStatus::Approved {
            entry.approved_at = Some(now);
        }
        entry.status = status;
    }
    if let Some(title) = data.title {
        entry.title = title;
    }
    if let Some(reviewer) = data.reviewer {
        entry.reviewer = reviewer;
    }
    if let Some(lines_changed) = data.lines_changed {
        entry.lines_changed = lines_changed;
    }
    if let Some(comments) = data.comments {
        entry.comments = comments;
    }
    if let Some(description) = data.description {
        entry.description = description;
    }
    if let Some(files_changed) = data.files_changed {
        entry.files_changed = files_changed;
    }
    entry.updated_at = now;

    Ok(entry.clone())
}

/// 删除代码审查
pub async fn delete_code_review(db: &Database, id: &str) -> AppResult<()> {
    let mut store = db.projects.write().await;
    store
        .code_reviews
        .remove(id)
        .map(|_| ())
        .ok_or_else(|| AppError::not_found(ErrorCode::CodeReviewNotFound, format!("Code review {id}")))
}

// ==================== 分支 ====================

/// 获取分支列表，可按项目过滤
pub async fn list_branches(db: &Database, project_id: Option<&str>) -> Vec<Branch> {
    let store = db.projects.read().await;
    store
        .branches
        .list()
        .into_iter()
        .filter(|b| project_id.is_none_or(|p| b.project_id == p))
        .collect()
}

/// 创建分支
pub async fn create_branch(db: &Database, data: BranchCreate) -> AppResult<Branch> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;

    let mut store = db.projects.write().await;
    if !store.projects.contains(&data.project_id) {
        return Err(AppError::not_found(
            ErrorCode::ProjectNotFound,
            format!("Project {}", data.project_id),
        ));
    }

    let now = Utc::now();
    let branch = Branch {
        id: Uuid::new_v4().to_string(),
        name: data.name,
        kind: data.kind.unwrap_or(BranchKind::Feature),
        last_commit: now,
        author: data.author,
        status: BranchStatus::Active,
        commits: 0,
        project_id: data.project_id,
        description: data.description.unwrap_or_default(),
        created_at: now,
        updated_at: now,
        last_commit_hash: String::new(),
        is_protected: data.is_protected.unwrap_or(false),
    };
    store.branches.insert(branch.clone());
    Ok(branch)
}

/// 更新分支
pub async fn update_branch(db: &Database, id: &str, data: BranchUpdate) -> AppResult<Branch> {
    let mut store = db.projects.write().await;
    let entry = store
        .branches
        .get_mut(id)
        .ok_or_else(|| AppError::not_found(ErrorCode::BranchNotFound, format!("Branch {id}")))?;

    if let Some(name) = data.name {
        entry.name = name;
    }
    if let Some(kind) = data.kind {
        entry.kind = kind;
    }
    if let Some(status) = data.status {
        entry.status = status;
    }
    if let Some(commits) = data.commits {
        entry.commits = commits;
    }
    if let Some(description) = data.description {
        entry.description = description;
    }
    if let Some(last_commit_hash) = data.last_commit_hash {
        entry.last_commit_hash = last_commit_hash;
        entry.last_commit = Utc::now();
    }
    if let Some(is_protected) = data.is_protected {
        entry.is_protected = is_protected;
    }
    entry.updated_at = Utc::now();

    Ok(entry.clone())
}

/// 删除分支
pub async fn delete_branch(db: &Database, id: &str) -> AppResult<()> {
    let mut store = db.projects.write().await;
    store
        .branches
        .remove(id)
        .map(|_| ())
        .ok_or_else(|| AppError::not_found(ErrorCode::BranchNotFound, format!("Branch {id}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_project_cascade_delete() {
        let db = Database::seeded();
        delete_project(&db, "proj_1").await.expect("delete");

        let store = db.projects.read().await;
        assert!(store.projects.get("proj_1").is_none());
        assert!(store.milestones.values().all(|m| m.project_id != "proj_1"));
        assert!(store.code_reviews.values().all(|r| r.project_id != "proj_1"));
        assert!(store.branches.values().all(|b| b.project_id != "proj_1"));
        // 其他项目的数据保留
        assert!(store.milestones.values().any(|m| m.project_id == "proj_2"));
    }

    #[tokio::test]
    async fn test_milestone_completion_stamp() {
        let db = Database::seeded();
        let created = create_milestone(
            &db,
            MilestoneCreate {
                title: "Beta cut".to_string(),
                description: None,
                due_date: chrono::NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
                project_id: "proj_2".to_string(),
                assigned_to: None,
            },
        )
        .await
        .expect("create");
        assert!(created.completed_at.is_none());

        let done = update_milestone(
            &db,
            &created.id,
            MilestoneUpdate {
                status: Some(MilestoneStatus::Completed),
                progress: Some(100),
                ..Default::default()
            },
        )
        .await
        .expect("update");
        let stamp = done.completed_at.expect("completed_at set");

        // 再次更新不会覆盖首次完成时间
        let again = update_milestone(
            &db,
            &created.id,
            MilestoneUpdate {
                progress: Some(100),
                status: Some(MilestoneStatus::Completed),
                ..Default::default()
            },
        )
        .await
        .expect("update again");
        assert_eq!(again.completed_at, Some(stamp));
    }

    #[tokio::test]
    async fn test_review_approval_stamp() {
        let db = Database::seeded();
        let approved = update_code_review(
            &db,
            "cr_1",
            CodeReviewUpdate {
                status: Some(ReviewStatus::Approved),
                ..Default::default()
            },
        )
        .await
        .expect("approve");
        assert!(approved.approved_at.is_some());
    }

    #[tokio::test]
    async fn test_dependents_require_existing_project() {
        let db = Database::seeded();
        let err = create_branch(
            &db,
            BranchCreate {
                name: "feature/x".to_string(),
                kind: None,
                author: "Alice Chen".to_string(),
                project_id: "missing".to_string(),
                description: None,
                is_protected: None,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ProjectNotFound);
    }

    #[tokio::test]
    async fn test_branch_listing_by_project() {
        let db = Database::seeded();
        let all = list_branches(&db, None).await;
        assert_eq!(all.len(), 3);
        let scoped = list_branches(&db, Some("proj_1")).await;
        assert_eq!(scoped.len(), 3);
        let none = list_branches(&db, Some("proj_2")).await;
        assert!(none.is_empty());
    }
}
