//! Permission Model
//!
//! The permission catalog is seeded at startup and read-only afterwards;
//! permissions are never created or deleted through the API.

use serde::{Deserialize, Serialize};

/// Wildcard marker in raw permission lists meaning "all permissions"
pub const PERMISSION_WILDCARD: &str = "*";

/// Permission entity (a node of the permission catalog)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    /// Dotted identifier, e.g. `user.read`
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PermissionKind,
    /// Parent permission id; `None` for catalog roots
    pub parent_id: Option<String>,
    /// Depth in the catalog tree (roots are level 1)
    pub level: u8,
}

/// Permission node kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionKind {
    /// Navigational entry
    Menu,
    /// Concrete operation
    Button,
}

/// A permission with its recursively collected children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionNode {
    #[serde(flatten)]
    pub permission: Permission,
    pub children: Vec<PermissionNode>,
}

/// Resolved permission grant of a role or user
///
/// Replaces raw `"*"`-in-a-list checks with a closed enum so access decisions
/// are exhaustively matchable. The wire form stays compatible with the
/// frontend: `All` serializes as `["*"]`, `Granted` as the plain list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub enum PermissionSet {
    /// Holder bypasses all granular permission checks
    All,
    /// Explicit grant list
    Granted(Vec<String>),
}

impl PermissionSet {
    /// Build from a raw permission list; a wildcard entry collapses to `All`
    pub fn from_raw(raw: Vec<String>) -> Self {
        if raw.iter().any(|p| p == PERMISSION_WILDCARD) {
            Self::All
        } else {
            Self::Granted(raw)
        }
    }

    /// Empty grant
    pub fn none() -> Self {
        Self::Granted(Vec::new())
    }

    /// Whether this grant covers the given permission id
    pub fn contains(&self, permission: &str) -> bool {
        match self {
            Self::All => true,
            Self::Granted(list) => list.iter().any(|p| p == permission),
        }
    }

    /// Whether this is the wildcard grant
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether nothing is granted
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Granted(list) if list.is_empty())
    }
}

impl From<Vec<String>> for PermissionSet {
    fn from(raw: Vec<String>) -> Self {
        Self::from_raw(raw)
    }
}

impl From<PermissionSet> for Vec<String> {
    fn from(set: PermissionSet) -> Self {
        match set {
            PermissionSet::All => vec![PERMISSION_WILDCARD.to_string()],
            PermissionSet::Granted(list) => list,
        }
    }
}

/// Role authority tier, derived from the role code
///
/// Access decisions match on this enum instead of comparing display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleTier {
    /// Unrestricted top administrator (`SUPER_ADMIN`)
    Super,
    /// Administrator scoped to their own department (`DEPT_ADMIN`)
    Department,
    /// Everyone else
    Standard,
}

impl RoleTier {
    /// Derive the tier from a role code
    pub fn from_code(code: &str) -> Self {
        match code {
            "SUPER_ADMIN" => Self::Super,
            "DEPT_ADMIN" => Self::Department,
            _ => Self::Standard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_collapses_to_all() {
        let set = PermissionSet::from_raw(vec![
            "user.read".to_string(),
            PERMISSION_WILDCARD.to_string(),
        ]);
        assert!(set.is_all());
        assert!(set.contains("anything.at.all"));
    }

    #[test]
    fn test_granted_containment() {
        let set = PermissionSet::from_raw(vec!["user.read".to_string(), "dept.read".to_string()]);
        assert!(set.contains("user.read"));
        assert!(!set.contains("user.delete"));
        assert!(!set.is_all());
        assert!(!set.is_empty());
        assert!(PermissionSet::none().is_empty());
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_string(&PermissionSet::All).unwrap();
        assert_eq!(json, "[\"*\"]");

        let set: PermissionSet = serde_json::from_str("[\"user.read\",\"*\"]").unwrap();
        assert!(set.is_all());

        let set: PermissionSet = serde_json::from_str("[\"user.read\"]").unwrap();
        assert_eq!(set, PermissionSet::Granted(vec!["user.read".to_string()]));
    }

    #[test]
    fn test_role_tier_from_code() {
        assert_eq!(RoleTier::from_code("SUPER_ADMIN"), RoleTier::Super);
        assert_eq!(RoleTier::from_code("DEPT_ADMIN"), RoleTier::Department);
        assert_eq!(RoleTier::from_code("DEVELOPER"), RoleTier::Standard);
        assert_eq!(RoleTier::from_code("USER"), RoleTier::Standard);
    }
}
