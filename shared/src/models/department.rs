//! Department Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EntityStatus;

/// Department entity
///
/// Departments form a tree via `parent_id`. A child's `level` must be
/// strictly greater than its parent's. `member_count` is a derived cache
/// maintained by the propagation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
    /// Uppercase code, e.g. `TECH`
    pub code: String,
    #[serde(default)]
    pub description: String,
    pub parent_id: Option<String>,
    /// Manager display name
    pub manager: String,
    pub manager_id: Option<String>,
    pub member_count: u32,
    /// Tree depth 1-10; children sit strictly below their parent
    pub level: u8,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create department payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentCreate {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub manager: String,
    #[serde(default)]
    pub manager_id: Option<String>,
    pub level: u8,
    #[serde(default)]
    pub status: Option<EntityStatus>,
}

/// Update department payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
}
