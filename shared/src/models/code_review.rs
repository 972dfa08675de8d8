//! Code Review Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Review lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Pending,
    InReview,
    Approved,
    Rejected,
}

/// Code review entity
///
/// `approved_at` is stamped the first time the status transitions to
/// `Approved` and kept afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeReview {
    pub id: String,
    pub title: String,
    pub author: String,
    pub reviewer: String,
    pub status: ReviewStatus,
    pub lines_changed: u32,
    pub comments: u32,
    pub project_id: String,
    #[serde(default)]
    pub branch_name: String,
    #[serde(default)]
    pub commit_hash: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub files_changed: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
}

/// Create code review payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeReviewCreate {
    pub title: String,
    pub author: String,
    pub reviewer: String,
    pub project_id: String,
    #[serde(default)]
    pub branch_name: Option<String>,
    #[serde(default)]
    pub commit_hash: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub lines_changed: Option<u32>,
    #[serde(default)]
    pub files_changed: Option<Vec<String>>,
}

/// Update code review payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeReviewUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReviewStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines_changed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files_changed: Option<Vec<String>>,
}
