//! Shared types for the CrmPlus admin console
//!
//! Model types, the unified error system and the API response envelope used
//! by the admin server and by API consumers.

pub mod error;
pub mod models;
pub mod request;
pub mod response;

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use response::{ApiResponse, PaginatedResponse, Pagination};
