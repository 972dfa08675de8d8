//! Unified error codes for the CrmPlus backend
//!
//! This module defines all error codes used across the admin server and the
//! frontend. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: User errors
//! - 4xxx: Role errors
//! - 5xxx: Department errors
//! - 6xxx: Release/deployment errors
//! - 7xxx: Project errors
//! - 8xxx: Dashboard errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Token has been revoked (logout)
    TokenRevoked = 1005,
    /// Account is disabled
    AccountDisabled = 1006,
    /// Account is pending activation
    AccountPending = 1007,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,
    /// Admin role required
    AdminRequired = 2003,
    /// Department admins may only manage their own department
    DepartmentScopeDenied = 2004,

    // ==================== 3xxx: User ====================
    /// User not found
    UserNotFound = 3001,
    /// Email is already registered to another user
    EmailExists = 3002,
    /// Employee id is already registered to another user
    EmployeeIdExists = 3003,

    // ==================== 4xxx: Role ====================
    /// Role not found
    RoleNotFound = 4001,
    /// Role name is taken
    RoleNameExists = 4002,
    /// Role code is taken
    RoleCodeExists = 4003,
    /// Role still referenced by users
    RoleInUse = 4004,

    // ==================== 5xxx: Department ====================
    /// Department not found
    DepartmentNotFound = 5001,
    /// Department name is taken
    DepartmentNameExists = 5002,
    /// Department code is taken
    DepartmentCodeExists = 5003,
    /// Department still has member users
    DepartmentHasMembers = 5004,
    /// Department still has child departments
    DepartmentHasChildren = 5005,
    /// Child department level must exceed the parent level
    DepartmentLevelInvalid = 5006,
    /// Department parent chain would form a cycle
    DepartmentCycle = 5007,

    // ==================== 6xxx: Release ====================
    /// Release not found
    ReleaseNotFound = 6001,
    /// Version string is taken
    VersionExists = 6002,
    /// Version string does not match the vX.Y.Z pattern
    VersionFormatInvalid = 6003,
    /// Released versions cannot be deleted
    ReleasePublished = 6004,
    /// Rollback target version does not exist
    RollbackTargetMissing = 6005,
    /// Deployment not found
    DeploymentNotFound = 6006,

    // ==================== 7xxx: Project ====================
    /// Project not found
    ProjectNotFound = 7001,
    /// Milestone not found
    MilestoneNotFound = 7002,
    /// Code review not found
    CodeReviewNotFound = 7003,
    /// Branch not found
    BranchNotFound = 7004,

    // ==================== 8xxx: Dashboard ====================
    /// Account application not found
    ApplicationNotFound = 8001,
    /// Invalid application status transition
    ApplicationStatusInvalid = 8002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            // General
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidFormat => "Invalid format",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",

            // Auth
            Self::NotAuthenticated => "Not authenticated",
            Self::InvalidCredentials => "Invalid username or password",
            Self::TokenExpired => "Token has expired",
            Self::TokenInvalid => "Token is invalid",
            Self::TokenRevoked => "Token has been revoked",
            Self::AccountDisabled => "Account has been disabled",
            Self::AccountPending => "Account is pending activation",

            // Permission
            Self::PermissionDenied => "Permission denied",
            Self::RoleRequired => "Required role missing",
            Self::AdminRequired => "Admin role required",
            Self::DepartmentScopeDenied => "Operation outside own department",

            // User
            Self::UserNotFound => "User not found",
            Self::EmailExists => "Email already in use",
            Self::EmployeeIdExists => "Employee id already in use",

            // Role
            Self::RoleNotFound => "Role not found",
            Self::RoleNameExists => "Role name already in use",
            Self::RoleCodeExists => "Role code already in use",
            Self::RoleInUse => "Role is still assigned to users",

            // Department
            Self::DepartmentNotFound => "Department not found",
            Self::DepartmentNameExists => "Department name already in use",
            Self::DepartmentCodeExists => "Department code already in use",
            Self::DepartmentHasMembers => "Department still has members",
            Self::DepartmentHasChildren => "Department still has child departments",
            Self::DepartmentLevelInvalid => "Child department level must exceed parent level",
            Self::DepartmentCycle => "Department parent chain would form a cycle",

            // Release
            Self::ReleaseNotFound => "Release not found",
            Self::VersionExists => "Version already exists",
            Self::VersionFormatInvalid => "Version must match the vX.Y.Z pattern",
            Self::ReleasePublished => "Released versions cannot be deleted",
            Self::RollbackTargetMissing => "Rollback target version does not exist",
            Self::DeploymentNotFound => "Deployment not found",

            // Project
            Self::ProjectNotFound => "Project not found",
            Self::MilestoneNotFound => "Milestone not found",
            Self::CodeReviewNotFound => "Code review not found",
            Self::BranchNotFound => "Branch not found",

            // Dashboard
            Self::ApplicationNotFound => "Account application not found",
            Self::ApplicationStatusInvalid => "Invalid application status",

            // System
            Self::InternalError => "Internal server error",
            Self::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::TokenRevoked),
            1006 => Ok(ErrorCode::AccountDisabled),
            1007 => Ok(ErrorCode::AccountPending),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::RoleRequired),
            2003 => Ok(ErrorCode::AdminRequired),
            2004 => Ok(ErrorCode::DepartmentScopeDenied),

            // User
            3001 => Ok(ErrorCode::UserNotFound),
            3002 => Ok(ErrorCode::EmailExists),
            3003 => Ok(ErrorCode::EmployeeIdExists),

            // Role
            4001 => Ok(ErrorCode::RoleNotFound),
            4002 => Ok(ErrorCode::RoleNameExists),
            4003 => Ok(ErrorCode::RoleCodeExists),
            4004 => Ok(ErrorCode::RoleInUse),

            // Department
            5001 => Ok(ErrorCode::DepartmentNotFound),
            5002 => Ok(ErrorCode::DepartmentNameExists),
            5003 => Ok(ErrorCode::DepartmentCodeExists),
            5004 => Ok(ErrorCode::DepartmentHasMembers),
            5005 => Ok(ErrorCode::DepartmentHasChildren),
            5006 => Ok(ErrorCode::DepartmentLevelInvalid),
            5007 => Ok(ErrorCode::DepartmentCycle),

            // Release
            6001 => Ok(ErrorCode::ReleaseNotFound),
            6002 => Ok(ErrorCode::VersionExists),
            6003 => Ok(ErrorCode::VersionFormatInvalid),
            6004 => Ok(ErrorCode::ReleasePublished),
            6005 => Ok(ErrorCode::RollbackTargetMissing),
            6006 => Ok(ErrorCode::DeploymentNotFound),

            // Project
            7001 => Ok(ErrorCode::ProjectNotFound),
            7002 => Ok(ErrorCode::MilestoneNotFound),
            7003 => Ok(ErrorCode::CodeReviewNotFound),
            7004 => Ok(ErrorCode::BranchNotFound),

            // Dashboard
            8001 => Ok(ErrorCode::ApplicationNotFound),
            8002 => Ok(ErrorCode::ApplicationStatusInvalid),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}
