//! Member directory store
//!
//! The four RBAC collections plus the seeded organization fixtures. The
//! whole directory sits behind a single `RwLock` (see [`super::Database`])
//! so uniqueness checks and the writes they guard cannot interleave.

use chrono::{DateTime, Utc};
use shared::models::{Department, OrgNode, Permission, ReportRelation, Role, User};

use super::table::{Entity, Table};

impl Entity for User {
    fn id(&self) -> &str {
        &self.id
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Role {
    fn id(&self) -> &str {
        &self.id
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Department {
    fn id(&self) -> &str {
        &self.id
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Users, roles, departments and the read-only permission catalog
#[derive(Debug, Default)]
pub struct Directory {
    pub users: Table<User>,
    pub roles: Table<Role>,
    pub departments: Table<Department>,
    /// Seeded once, never mutated through the API; insertion order is the
    /// display order of the permission tree
    pub permissions: Vec<Permission>,
    /// Seeded organization chart, served read-only
    pub org_tree: Vec<OrgNode>,
    /// Seeded reporting edges, served read-only
    pub report_relations: Vec<ReportRelation>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a user by email or employee id (login identifier)
    pub fn find_login_user(&self, identifier: &str) -> Option<&User> {
        self.users
            .values()
            .find(|u| u.email == identifier || u.employee_id == identifier)
    }
}
