//! Release and deployment store
//!
//! Releases and deployments keep the original numeric ids; rows live in
//! insertion order and ids come from monotonic counters.

use shared::models::{Deployment, Release};

/// Releases and deployment runs
#[derive(Debug)]
pub struct ReleaseStore {
    pub releases: Vec<Release>,
    pub deployments: Vec<Deployment>,
    next_release_id: u64,
    next_deployment_id: u64,
}

impl ReleaseStore {
    pub fn new() -> Self {
        Self {
            releases: Vec::new(),
            deployments: Vec::new(),
            next_release_id: 1,
            next_deployment_id: 1,
        }
    }

    /// Seed rows and advance the counters past the seeded ids
    pub fn with_seed(releases: Vec<Release>, deployments: Vec<Deployment>) -> Self {
        let next_release_id = releases.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let next_deployment_id = deployments.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        Self {
            releases,
            deployments,
            next_release_id,
            next_deployment_id,
        }
    }

    pub fn next_release_id(&mut self) -> u64 {
        let id = self.next_release_id;
        self.next_release_id += 1;
        id
    }

    pub fn next_deployment_id(&mut self) -> u64 {
        let id = self.next_deployment_id;
        self.next_deployment_id += 1;
        id
    }

    pub fn release(&self, id: u64) -> Option<&Release> {
        self.releases.iter().find(|r| r.id == id)
    }

    pub fn release_mut(&mut self, id: u64) -> Option<&mut Release> {
        self.releases.iter_mut().find(|r| r.id == id)
    }

    pub fn release_by_version(&self, version: &str) -> Option<&Release> {
        self.releases.iter().find(|r| r.version == version)
    }
}

impl Default for ReleaseStore {
    fn default() -> Self {
        Self::new()
    }
}
