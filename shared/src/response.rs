//! API Response types
//!
//! Standardized API response structures for the whole backend

use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorCode};

/// Unified API response structure
///
/// All API responses follow this format:
/// ```json
/// {
///     "success": true,
///     "data": { ... },
///     "message": "Success",
///     "code": 0
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message
    pub message: String,
    /// Response code (0 = success, others = error codes)
    pub code: u16,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: "Success".to_string(),
            code: 0,
        }
    }

    /// Create a successful response with custom message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            code: 0,
        }
    }
}

impl ApiResponse<()> {
    /// Create a successful response without data
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: message.into(),
            code: 0,
        }
    }

    /// Create an error response from an [`AppError`]
    pub fn error(err: &AppError) -> Self {
        Self {
            success: false,
            data: None,
            message: err.message.clone(),
            code: err.code.code(),
        }
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = if self.code == 0 {
            http::StatusCode::OK
        } else {
            ErrorCode::try_from(self.code)
                .map(|c| c.http_status())
                .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR)
        };

        (status, Json(self)).into_response()
    }
}

/// Pagination metadata
///
/// Wire names follow the frontend's expectations (`current`, `pageSize`,
/// `total`, `pages`).
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page number (1-based)
    pub current: u32,
    /// Items per page
    pub page_size: u32,
    /// Total number of items
    pub total: u64,
    /// Total number of pages
    pub pages: u32,
}

impl Pagination {
    /// Create a new pagination
    pub fn new(current: u32, page_size: u32, total: u64) -> Self {
        let pages = if page_size == 0 {
            0
        } else {
            total.div_ceil(page_size as u64) as u32
        };
        Self {
            current,
            page_size,
            total,
            pages,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// List of items on the requested page
    pub items: Vec<T>,
    /// Pagination metadata
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    /// Create a paginated response from an already-sliced page
    pub fn new(items: Vec<T>, current: u32, page_size: u32, total: u64) -> Self {
        Self {
            items,
            pagination: Pagination::new(current, page_size, total),
        }
    }

    /// Slice a full result set into the requested page
    pub fn paginate(all: Vec<T>, current: u32, page_size: u32) -> Self {
        let total = all.len() as u64;
        let page = current.max(1);
        let start = ((page - 1) as usize).saturating_mul(page_size as usize);
        let items: Vec<T> = all
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .collect();
        Self::new(items, page, page_size, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_pages() {
        assert_eq!(Pagination::new(1, 10, 0).pages, 0);
        assert_eq!(Pagination::new(1, 10, 10).pages, 1);
        assert_eq!(Pagination::new(1, 10, 11).pages, 2);
        assert_eq!(Pagination::new(1, 0, 11).pages, 0);
    }

    #[test]
    fn test_paginate_slices() {
        let all: Vec<u32> = (1..=25).collect();
        let page = PaginatedResponse::paginate(all, 2, 10);
        assert_eq!(page.items, (11..=20).collect::<Vec<u32>>());
        assert_eq!(page.pagination.total, 25);
        assert_eq!(page.pagination.pages, 3);
    }

    #[test]
    fn test_paginate_past_end() {
        let all: Vec<u32> = (1..=5).collect();
        let page = PaginatedResponse::paginate(all, 3, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total, 5);
    }

    #[test]
    fn test_pagination_wire_names() {
        let json = serde_json::to_string(&Pagination::new(1, 10, 3)).unwrap();
        assert!(json.contains("\"pageSize\":10"));
        assert!(json.contains("\"current\":1"));
    }
}
