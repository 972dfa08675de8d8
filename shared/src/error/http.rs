//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::UserNotFound
            | Self::RoleNotFound
            | Self::DepartmentNotFound
            | Self::ReleaseNotFound
            | Self::DeploymentNotFound
            | Self::ProjectNotFound
            | Self::MilestoneNotFound
            | Self::CodeReviewNotFound
            | Self::BranchNotFound
            | Self::ApplicationNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict (uniqueness violations and blocked deletes)
            Self::AlreadyExists
            | Self::EmailExists
            | Self::EmployeeIdExists
            | Self::RoleNameExists
            | Self::RoleCodeExists
            | Self::RoleInUse
            | Self::DepartmentNameExists
            | Self::DepartmentCodeExists
            | Self::DepartmentHasMembers
            | Self::DepartmentHasChildren
            | Self::DepartmentLevelInvalid
            | Self::DepartmentCycle
            | Self::VersionExists
            | Self::ReleasePublished => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid
            | Self::TokenRevoked => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::PermissionDenied
            | Self::RoleRequired
            | Self::AdminRequired
            | Self::DepartmentScopeDenied
            | Self::AccountDisabled
            | Self::AccountPending => StatusCode::FORBIDDEN,

            // 500 Internal Server Error
            Self::InternalError | Self::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(ErrorCode::UserNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::EmailExists.http_status(), StatusCode::CONFLICT);
        assert_eq!(ErrorCode::RoleInUse.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::DepartmentHasMembers.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::TokenRevoked.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ErrorCode::DepartmentScopeDenied.http_status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ErrorCode::ValidationFailed.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
