//! Organization Models
//!
//! Read-only organization chart and reporting-line data.

use serde::{Deserialize, Serialize};

/// Organization chart node kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrgNodeKind {
    Company,
    Department,
    Team,
}

/// Organization chart node
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: OrgNodeKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OrgNode>,
}

/// A reporting edge between two users
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRelation {
    pub from: String,
    pub to: String,
    pub from_name: String,
    pub to_name: String,
}
