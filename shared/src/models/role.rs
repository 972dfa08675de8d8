//! Role Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EntityStatus;
use super::permission::PermissionSet;

/// Role entity
///
/// `user_count` is a derived cache maintained by the propagation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub name: String,
    /// Uppercase code, e.g. `SUPER_ADMIN`
    pub code: String,
    pub description: String,
    pub permissions: PermissionSet,
    /// Authority level 1-10; lower means more authority
    pub level: u8,
    pub status: EntityStatus,
    pub user_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create role payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCreate {
    pub name: String,
    pub code: String,
    pub description: String,
    /// Raw permission list; `"*"` collapses to the wildcard grant
    #[serde(default)]
    pub permissions: Vec<String>,
    pub level: u8,
    #[serde(default)]
    pub status: Option<EntityStatus>,
}

/// Update role payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
}
