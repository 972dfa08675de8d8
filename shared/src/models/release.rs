//! Release and Deployment Models
//!
//! Version tracking for the dev-management pages: releases follow the
//! `vX.Y.Z` pattern and move through a small lifecycle; deployments reference
//! an existing release version.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Release lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseStatus {
    InDevelopment,
    InTesting,
    Released,
    RolledBack,
}

/// Release priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleasePriority {
    High,
    Medium,
    Low,
}

/// Release test progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestStatus {
    NotTested,
    Testing,
    Passed,
}

/// Release entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    pub id: u64,
    /// Version string, `vX.Y.Z`
    pub version: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub release_date: NaiveDate,
    pub status: ReleaseStatus,
    pub priority: ReleasePriority,
    pub developer: String,
    pub test_status: TestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollback_version: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create release payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseCreate {
    pub version: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub release_date: NaiveDate,
    #[serde(default)]
    pub priority: Option<ReleasePriority>,
    pub developer: String,
}

/// Update release payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReleaseStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<ReleasePriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_status: Option<TestStatus>,
}

/// Deployment run status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentStatus {
    InProgress,
    Succeeded,
    Failed,
}

/// Deployment entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub id: u64,
    /// Target environment, e.g. `production`, `staging`, `testing`
    pub environment: String,
    /// Deployed release version (must exist)
    pub version: String,
    pub deploy_time: DateTime<Utc>,
    pub status: DeploymentStatus,
    /// Completion percentage 0-100
    pub progress: u8,
    pub operator: String,
    pub duration: String,
    pub logs: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create deployment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentCreate {
    pub environment: String,
    pub version: String,
    pub operator: String,
}
