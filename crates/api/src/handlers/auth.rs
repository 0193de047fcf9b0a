//! Handlers for login, logout and password change.

use axum::extract::State;
use axum::Json;
use linkhub_db::models::admin::AdminInfo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::credentials;
use crate::auth::jwt::generate_token;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: AdminInfo,
}

/// Request body for `PATCH /change-password`.
#[derive(Debug, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/login
///
/// Authenticate with username + password. Returns a session token.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    input.validate()?;

    let admin = match credentials::authenticate(&state.pool, &input.username, &input.password).await
    {
        Ok(admin) => admin,
        Err(err) => {
            tracing::warn!(username = %input.username, "Login failed");
            return Err(err);
        }
    };

    let token = generate_token(admin.id, &admin.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(admin_id = admin.id, "Admin logged in");
    Ok(Json(LoginResponse {
        token,
        expires_in: state.config.jwt.expiry_secs(),
        user: AdminInfo::from(&admin),
    }))
}

/// PATCH /api/change-password
///
/// Requires the current password. Sessions issued before the change stop
/// working.
pub async fn change_password(
    State(state): State<AppState>,
    AuthAdmin(admin): AuthAdmin,
    AppJson(input): AppJson<ChangePasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    input.validate()?;

    credentials::change_password(
        &state.pool,
        admin.id,
        &input.current_password,
        &input.new_password,
    )
    .await?;

    tracing::info!(admin_id = admin.id, "Admin password changed");
    Ok(Json(MessageResponse::new("Password changed successfully")))
}

/// POST /api/logout
///
/// Sessions are stateless; the client discards its token.
pub async fn logout(AuthAdmin(admin): AuthAdmin) -> Json<MessageResponse> {
    tracing::info!(admin_id = admin.id, "Admin logged out");
    Json(MessageResponse::new("Logout successful"))
}
