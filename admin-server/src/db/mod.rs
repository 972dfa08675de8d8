//! In-memory storage layer
//!
//! # Structure
//!
//! - [`table`] - the id-keyed repository primitive
//! - [`directory`] - users, roles, departments, permission catalog
//! - [`projects`] - projects, milestones, code reviews, branches
//! - [`releases`] - releases and deployment runs
//! - [`dashboard`] - statistic cards and account applications
//! - [`seed`] - startup fixtures
//!
//! Each store sits behind its own `RwLock`; a mutating operation holds the
//! write guard for its full check-then-write sequence, which is what keeps
//! uniqueness checks race-free. Guards are never held across an await point.

pub mod dashboard;
pub mod directory;
pub mod projects;
pub mod releases;
pub mod seed;
pub mod table;

pub use dashboard::DashboardStore;
pub use directory::Directory;
pub use projects::ProjectStore;
pub use releases::ReleaseStore;
pub use table::{Entity, Table};

use tokio::sync::RwLock;

/// Process-wide data store
#[derive(Debug)]
pub struct Database {
    pub directory: RwLock<Directory>,
    pub projects: RwLock<ProjectStore>,
    pub releases: RwLock<ReleaseStore>,
    pub dashboard: RwLock<DashboardStore>,
}

impl Database {
    /// Empty store (tests build their own fixtures)
    pub fn empty() -> Self {
        Self {
            directory: RwLock::new(Directory::new()),
            projects: RwLock::new(ProjectStore::new()),
            releases: RwLock::new(ReleaseStore::new()),
            dashboard: RwLock::new(DashboardStore::new()),
        }
    }

    /// Store populated with the demo fixtures
    pub fn seeded() -> Self {
        seed::seed()
    }
}
