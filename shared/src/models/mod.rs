//! Data Models
//!
//! Entity and payload types shared between the admin server and API
//! consumers. Wire format is camelCase to match the frontend.

pub mod branch;
pub mod code_review;
pub mod dashboard;
pub mod department;
pub mod milestone;
pub mod organization;
pub mod permission;
pub mod project;
pub mod release;
pub mod role;
pub mod statistics;
pub mod user;

pub use branch::{Branch, BranchCreate, BranchKind, BranchStatus, BranchUpdate};
pub use code_review::{CodeReview, CodeReviewCreate, CodeReviewUpdate, ReviewStatus};
pub use dashboard::{AccountApplication, ApplicationStatus, DashboardOverview, StatCard};
pub use department::{Department, DepartmentCreate, DepartmentUpdate};
pub use milestone::{Milestone, MilestoneCreate, MilestoneStatus, MilestoneUpdate};
pub use organization::{OrgNode, OrgNodeKind, ReportRelation};
pub use permission::{
    PERMISSION_WILDCARD, Permission, PermissionKind, PermissionNode, PermissionSet, RoleTier,
};
pub use project::{
    Activity, ActivityKind, CodeQualityStats, Project, ProjectCreate, ProjectStats, ProjectStatus,
    ProjectUpdate, TaskSummary,
};
pub use release::{
    Deployment, DeploymentCreate, DeploymentStatus, Release, ReleaseCreate, ReleasePriority,
    ReleaseStatus, ReleaseUpdate, TestStatus,
};
pub use role::{Role, RoleCreate, RoleUpdate};
pub use statistics::{
    DepartmentUserStat, MemberStatistics, RecentUser, RoleUserStat, TotalCount, UserStatusCounts,
};
pub use user::{User, UserCreate, UserStatus, UserUpdate};

use serde::{Deserialize, Serialize};

/// Enabled/disabled status shared by roles and departments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    Active,
    Disabled,
}
