//! Dashboard store

use shared::models::{AccountApplication, StatCard};

/// Statistic cards and account applications
#[derive(Debug, Default)]
pub struct DashboardStore {
    pub cards: Vec<StatCard>,
    pub applications: Vec<AccountApplication>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn application_mut(&mut self, id: u64) -> Option<&mut AccountApplication> {
        self.applications.iter_mut().find(|a| a.id == id)
    }
}
