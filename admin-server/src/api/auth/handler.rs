//! Authentication Handlers
//!
//! Handles login, logout, and current-user lookup

use std::time::Duration;

use axum::{Extension, Json, extract::State};
use chrono::Utc;
use http::HeaderMap;
use serde::{Deserialize, Serialize};
use shared::models::{User, UserStatus};
use shared::{ApiResponse, AppError, ErrorCode};

use crate::auth::{CurrentUser, JwtService};
use crate::core::AppState;
use crate::members;
use crate::utils::AppResult;

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Login payload; `username` matches email or employee id
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login result
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// POST /api/auth/login
///
/// Verifies credentials, issues a JWT and registers it as active.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<ApiResponse<LoginResponse>> {
    let username = req.username.clone();

    let (user, role_code) = {
        let dir = state.db.directory.read().await;
        let user = dir.find_login_user(&req.username).cloned();
        let role_code = user
            .as_ref()
            .and_then(|u| dir.roles.get(&u.role_id))
            .map(|r| r.code.clone());
        (user, role_code)
    };

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent username enumeration
    let user = match user {
        Some(user) => user,
        None => {
            tracing::warn!(username = %username, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    match user.status {
        UserStatus::Active => {}
        UserStatus::Disabled => {
            return Err(AppError::new(ErrorCode::AccountDisabled));
        }
        UserStatus::Pending => {
            return Err(AppError::new(ErrorCode::AccountPending));
        }
    }

    let password_valid = user
        .verify_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
    if !password_valid {
        tracing::warn!(username = %username, "Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    let role_code = role_code.unwrap_or_default();
    let token = state
        .jwt_service
        .generate_token(&user, &role_code)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;
    state.tokens.register(&token);

    // Stamp last_login on the stored row
    let user = {
        let mut dir = state.db.directory.write().await;
        match dir.users.get_mut(&user.id) {
            Some(entry) => {
                entry.last_login = Some(Utc::now());
                entry.clone()
            }
            None => user,
        }
    };

    tracing::info!(
        user_id = %user.id,
        email = %user.email,
        role = %user.role,
        "User logged in successfully"
    );

    Ok(ApiResponse::ok_with_message(
        LoginResponse { token, user },
        "Login successful",
    ))
}

/// POST /api/auth/logout
///
/// Revokes the presented bearer token.
pub async fn logout(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    headers: HeaderMap,
) -> AppResult<ApiResponse<()>> {
    let token = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(JwtService::extract_from_header)
        .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?;

    state.tokens.revoke(token);

    tracing::info!(user_id = %user.id, "User logged out");
    Ok(ApiResponse::message("Logout successful"))
}

/// GET /api/auth/me
///
/// Returns the caller's fresh user record.
pub async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<ApiResponse<User>> {
    let user = members::users::get(&state.db, &user.id).await?;
    Ok(ApiResponse::ok(user))
}
