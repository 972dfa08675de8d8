//! Member Statistics Models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// User counts by lifecycle status
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusCounts {
    pub total: u32,
    pub active: u32,
    pub pending: u32,
    pub disabled: u32,
}

/// Simple total wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalCount {
    pub total: u32,
}

/// User count per department
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentUserStat {
    pub department_id: String,
    pub department_name: String,
    pub user_count: u32,
}

/// User count per role
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUserStat {
    pub role_id: String,
    pub role_name: String,
    pub user_count: u32,
}

/// Entry of the most-recently-created users list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentUser {
    pub id: String,
    pub name: String,
    pub department: String,
    pub join_date: NaiveDate,
}

/// Member-management statistics aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStatistics {
    pub users: UserStatusCounts,
    pub roles: TotalCount,
    pub departments: TotalCount,
    pub department_stats: Vec<DepartmentUserStat>,
    pub role_stats: Vec<RoleUserStat>,
    pub recent_users: Vec<RecentUser>,
}
