//! 版本与部署跟踪子系统

pub mod service;

pub use service::{DeploymentFilters, ReleaseFilters};
