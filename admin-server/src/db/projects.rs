//! Project tracking store

use chrono::{DateTime, Utc};
use shared::models::{Branch, CodeReview, Milestone, Project};

use super::table::{Entity, Table};

impl Entity for Project {
    fn id(&self) -> &str {
        &self.id
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Milestone {
    fn id(&self) -> &str {
        &self.id
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for CodeReview {
    fn id(&self) -> &str {
        &self.id
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Branch {
    fn id(&self) -> &str {
        &self.id
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Projects with their milestones, code reviews and branches
#[derive(Debug, Default)]
pub struct ProjectStore {
    pub projects: Table<Project>,
    pub milestones: Table<Milestone>,
    pub code_reviews: Table<CodeReview>,
    pub branches: Table<Branch>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}
