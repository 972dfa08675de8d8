//! Input validation helpers
//!
//! Centralized text length constants and field-format checks used by the
//! integrity layer in front of every create/update.

use shared::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: user, role, department, project, release, etc.
pub const MAX_NAME_LEN: usize = 50;

/// Minimum length for display names
pub const MIN_NAME_LEN: usize = 2;

/// Descriptions
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate a display name (required, 2-50 chars).
pub fn validate_name(value: &str, field: &str) -> Result<(), AppError> {
    validate_required_text(value, field, MAX_NAME_LEN)?;
    if value.trim().len() < MIN_NAME_LEN {
        return Err(AppError::validation(format!(
            "{field} must be at least {MIN_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Role and department codes: uppercase letters and underscores only.
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|c| c.is_ascii_uppercase() || c == '_')
}

/// Minimal email shape check: `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LEN {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Mobile number shape: 11 digits starting `1[3-9]`.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 11
        && phone.chars().all(|c| c.is_ascii_digit())
        && phone.starts_with('1')
        && matches!(phone.as_bytes()[1], b'3'..=b'9')
}

/// Release version shape: `vX.Y.Z` with numeric components.
pub fn is_valid_version(version: &str) -> bool {
    let Some(rest) = version.strip_prefix('v') else {
        return false;
    };
    let parts: Vec<&str> = rest.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("ok", "field", 10).is_ok());
        assert!(validate_required_text("  ", "field", 10).is_err());
        assert!(validate_required_text("toolongvalue", "field", 5).is_err());
    }

    #[test]
    fn test_code_pattern() {
        assert!(is_valid_code("SUPER_ADMIN"));
        assert!(is_valid_code("TECH"));
        assert!(!is_valid_code("tech"));
        assert!(!is_valid_code("TECH-1"));
        assert!(!is_valid_code(""));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("alice.chen@company.com"));
        assert!(!is_valid_email("alice.chen"));
        assert!(!is_valid_email("@company.com"));
        assert!(!is_valid_email("alice@com"));
        assert!(!is_valid_email("alice@.com"));
    }

    #[test]
    fn test_phone_shape() {
        assert!(is_valid_phone("13812345678"));
        assert!(!is_valid_phone("12812345678"));
        assert!(!is_valid_phone("1381234567"));
        assert!(!is_valid_phone("1381234567a"));
    }

    #[test]
    fn test_version_shape() {
        assert!(is_valid_version("v1.0.0"));
        assert!(is_valid_version("v12.34.56"));
        assert!(!is_valid_version("1.0.0"));
        assert!(!is_valid_version("v1.0"));
        assert!(!is_valid_version("v1.0.x"));
    }
}
