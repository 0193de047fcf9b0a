//! Resolving a presented session token to a live admin.
//!
//! Validation re-reads the admin from the store on every request, so a
//! deleted admin or a password change takes effect immediately instead of
//! waiting for the token to expire.

use linkhub_db::models::admin::Admin;
use linkhub_db::repositories::AdminRepo;

use crate::auth::jwt::{validate_token, JwtConfig};
use crate::error::AppResult;

/// Why a request failed to authenticate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Missing Authorization header")]
    MissingHeader,

    #[error("Invalid Authorization format. Expected: Bearer <token>")]
    MalformedHeader,

    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,
}

/// Split an `Authorization` header value into its bearer token.
///
/// The value must be exactly `Bearer <token>` (scheme matched
/// case-insensitively, a single space, non-empty token without spaces).
pub fn parse_bearer(header: &str) -> Result<&str, AuthError> {
    let (scheme, token) = header.split_once(' ').ok_or(AuthError::MalformedHeader)?;
    if !scheme.eq_ignore_ascii_case("Bearer") || token.is_empty() || token.contains(' ') {
        return Err(AuthError::MalformedHeader);
    }
    Ok(token)
}

/// Validate `token` and load the admin it was issued to.
///
/// Fails with [`AuthError::InvalidOrExpiredToken`] when the signature or
/// expiry check fails, the admin no longer exists, or the admin changed
/// their password after the token was issued. Store failures surface as
/// database errors, not as authentication failures.
pub async fn resolve_admin(
    pool: &linkhub_db::DbPool,
    config: &JwtConfig,
    token: &str,
) -> AppResult<Admin> {
    let claims = validate_token(token, config).map_err(|e| {
        tracing::debug!(error = %e, "Rejected session token");
        AuthError::InvalidOrExpiredToken
    })?;

    let admin = AdminRepo::find_by_id(pool, claims.sub)
        .await?
        .ok_or(AuthError::InvalidOrExpiredToken)?;

    if claims.iat < admin.password_changed_at.timestamp() {
        tracing::debug!(admin_id = admin.id, "Session predates password change");
        return Err(AuthError::InvalidOrExpiredToken.into());
    }

    Ok(admin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_is_extracted() {
        assert_eq!(parse_bearer("Bearer abc.def.ghi"), Ok("abc.def.ghi"));
        assert_eq!(parse_bearer("bearer abc"), Ok("abc"));
    }

    #[test]
    fn wrong_shape_is_malformed() {
        for header in ["abc", "Basic abc", "Bearer ", "Bearer a b", "Bearer"] {
            assert_eq!(
                parse_bearer(header),
                Err(AuthError::MalformedHeader),
                "{header:?} should be malformed"
            );
        }
    }
}
