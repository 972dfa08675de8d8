//! Dashboard Models
//!
//! Statistic cards and account applications shown on the admin landing page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dashboard statistic card
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub key: String,
    pub title: String,
    pub value: i64,
    /// Percentage change against the previous period; negative means a drop
    pub increase: f64,
}

/// Account application review status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

/// Account application entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountApplication {
    pub id: u64,
    pub name: String,
    pub region: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: ApplicationStatus,
    pub create_time: DateTime<Utc>,
}

/// Dashboard overview aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub statistics: Vec<StatCard>,
    pub recent_applications: Vec<AccountApplication>,
    pub total_applications: u32,
    pub pending_applications: u32,
    pub approved_applications: u32,
    pub rejected_applications: u32,
}
