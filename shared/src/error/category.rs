//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 3xxx: User errors
/// - 4xxx: Role errors
/// - 5xxx: Department errors
/// - 6xxx: Release errors
/// - 7xxx: Project errors
/// - 8xxx: Dashboard errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// User errors (3xxx)
    User,
    /// Role errors (4xxx)
    Role,
    /// Department errors (5xxx)
    Department,
    /// Release errors (6xxx)
    Release,
    /// Project errors (7xxx)
    Project,
    /// Dashboard errors (8xxx)
    Dashboard,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::User,
            4000..5000 => Self::Role,
            5000..6000 => Self::Department,
            6000..7000 => Self::Release,
            7000..8000 => Self::Project,
            8000..9000 => Self::Dashboard,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::User => "user",
            Self::Role => "role",
            Self::Department => "department",
            Self::Release => "release",
            Self::Project => "project",
            Self::Dashboard => "dashboard",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(3002), ErrorCategory::User);
        assert_eq!(ErrorCategory::from_code(4004), ErrorCategory::Role);
        assert_eq!(ErrorCategory::from_code(5005), ErrorCategory::Department);
        assert_eq!(ErrorCategory::from_code(6003), ErrorCategory::Release);
        assert_eq!(ErrorCategory::from_code(7001), ErrorCategory::Project);
        assert_eq!(ErrorCategory::from_code(8001), ErrorCategory::Dashboard);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::NotFound.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::TokenRevoked.category(), ErrorCategory::Auth);
        assert_eq!(
            ErrorCode::DepartmentScopeDenied.category(),
            ErrorCategory::Permission
        );
        assert_eq!(ErrorCode::EmailExists.category(), ErrorCategory::User);
        assert_eq!(ErrorCode::RoleInUse.category(), ErrorCategory::Role);
        assert_eq!(
            ErrorCode::DepartmentCycle.category(),
            ErrorCategory::Department
        );
        assert_eq!(
            ErrorCode::VersionExists.category(),
            ErrorCategory::Release
        );
        assert_eq!(
            ErrorCode::MilestoneNotFound.category(),
            ErrorCategory::Project
        );
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Department).unwrap();
        assert_eq!(json, "\"department\"");

        let category: ErrorCategory = serde_json::from_str("\"auth\"").unwrap();
        assert_eq!(category, ErrorCategory::Auth);
    }
}
