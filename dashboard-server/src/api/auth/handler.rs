//! Authentication Handlers
//!
//! Handles login, logout, and current-user lookup

use std::time::Duration;

use axum::{Extension, Json, extract::State};

use crate::AppError;
use crate::auth::{CredentialError, CurrentUser};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::{AppResponse, ok, ok_with_message};

// Re-use shared DTOs for API consistency
use shared::client::{LoginRequest, LoginResponse, UserInfo};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Login handler
///
/// Authenticates user credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AppResponse<LoginResponse>>, AppError> {
    let result = state
        .credentials
        .authenticate(&req.username, &req.password)
        .await;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Check authentication result - unified error message to prevent username enumeration
    let user = match result {
        Ok(user) => user,
        Err(CredentialError::InvalidCredentials) => {
            security_log!("WARN", "login_failed", username = req.username.clone());
            tracing::warn!(username = %req.username, "Login failed - invalid credentials");
            return Err(AppError::invalid_credentials());
        }
        Err(CredentialError::Store(msg)) => {
            return Err(AppError::internal(format!(
                "Credential store failure: {}",
                msg
            )));
        }
    };

    // Generate JWT token
    let jwt_service = state.get_jwt_service();
    let token = jwt_service
        .generate_token(&user.id, &user.username, &user.role, &user.permissions)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    security_log!(
        "INFO",
        "login_success",
        user_id = user.id.clone(),
        username = user.username.clone()
    );

    tracing::info!(
        user_id = %user.id,
        username = %user.username,
        role = %user.role,
        "User logged in successfully"
    );

    let response = LoginResponse {
        token,
        user: UserInfo {
            id: user.id,
            username: user.username,
            role: user.role,
            permissions: user.permissions,
        },
    };

    Ok(ok(response))
}

/// Get current user info
///
/// Reads the user straight from the validated token claims.
pub async fn me(
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<AppResponse<UserInfo>>, AppError> {
    let user_info = UserInfo {
        id: user.id,
        username: user.username,
        role: user.role,
        permissions: user.permissions,
    };

    Ok(ok(user_info))
}

/// Logout handler
///
/// Tokens are stateless, so this only acknowledges the request; the
/// client discards its copy of the token.
pub async fn logout(
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<AppResponse<()>>, AppError> {
    tracing::info!(
        user_id = %user.id,
        username = %user.username,
        "User logged out"
    );

    Ok(ok_with_message((), "Logged out"))
}
