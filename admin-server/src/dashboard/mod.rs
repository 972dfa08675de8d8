//! 仪表板子系统

pub mod service;

pub use service::ApplicationFilters;
