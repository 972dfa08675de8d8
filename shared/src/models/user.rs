//! User Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::permission::PermissionSet;

/// User lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Pending,
    Disabled,
}

/// User entity
///
/// `department` and `role` are denormalized display names kept in sync by
/// the propagation engine; `permissions` is the resolved copy of the role's
/// grant at assignment/propagation time, not a live join.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    /// Unique employee number, e.g. `U001`
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub avatar: String,
    pub department_id: String,
    /// Cached department display name
    pub department: String,
    pub position: String,
    pub role_id: String,
    /// Cached role display name
    pub role: String,
    pub permissions: PermissionSet,
    pub status: UserStatus,
    /// Argon2 hash; empty until a password is assigned
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub last_login: Option<DateTime<Utc>>,
    pub report_to: Option<String>,
    pub report_to_id: Option<String>,
    pub join_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Verify a login password against the stored argon2 hash
    ///
    /// Accounts without an assigned password never verify.
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        if self.password_hash.is_empty() {
            return Ok(false);
        }

        let parsed_hash = PasswordHash::new(&self.password_hash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub department_id: String,
    pub position: String,
    pub role_id: String,
    #[serde(default)]
    pub report_to_id: Option<String>,
    #[serde(default)]
    pub status: Option<UserStatus>,
    /// Initial login password; the account cannot log in without one
    #[serde(default)]
    pub password: Option<String>,
}

/// Update user payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_to_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
