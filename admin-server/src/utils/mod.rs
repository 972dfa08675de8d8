//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`validation`] - 输入校验
//! - 日志等工具

pub mod logger;
pub mod result;
pub mod validation;

pub use result::AppResult;
pub use shared::{AppError, ErrorCategory, ErrorCode};
