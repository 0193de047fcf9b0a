//! Route definitions for session management.

use axum::routing::{patch, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Unauthenticated auth routes.
///
/// ```text
/// POST /login  -> login
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/login", post(auth::login))
}

/// Auth routes that require a session.
///
/// ```text
/// POST  /logout           -> logout
/// PATCH /change-password  -> change_password
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/logout", post(auth::logout))
        .route("/change-password", patch(auth::change_password))
}
