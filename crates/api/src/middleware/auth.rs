//! Session gate for protected routes.
//!
//! [`require_session`] runs as a route layer in front of every protected
//! handler, so a request without a valid session is rejected with 401
//! before any path, body, or store access happens. On success it stores the
//! resolved [`AuthAdmin`] in the request extensions, where handlers pick it
//! up as a typed extractor.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use linkhub_db::models::admin::Admin;

use crate::auth::session::{parse_bearer, resolve_admin, AuthError};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Admin authenticated for the current request.
///
/// ```ignore
/// async fn my_handler(admin: AuthAdmin) -> AppResult<Json<()>> {
///     tracing::info!(admin_id = admin.0.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthAdmin(pub Admin);

/// Route layer rejecting requests that lack a valid session.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let admin = authenticate(request.headers(), &state).await?;
    request.extensions_mut().insert(AuthAdmin(admin));
    Ok(next.run(request).await)
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(admin) = parts.extensions.get::<AuthAdmin>() {
            return Ok(admin.clone());
        }
        // Not behind the gate: authenticate here instead.
        let admin = authenticate(&parts.headers, state).await?;
        Ok(AuthAdmin(admin))
    }
}

async fn authenticate(headers: &HeaderMap, state: &AppState) -> AppResult<Admin> {
    let header = headers.get(AUTHORIZATION).ok_or(AuthError::MissingHeader)?;
    let header = header.to_str().map_err(|_| AuthError::MalformedHeader)?;
    let token = parse_bearer(header)?;
    resolve_admin(&state.pool, &state.config.jwt, token).await
}
