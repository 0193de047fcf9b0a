//! Login and password change against the admin store.

use linkhub_core::credentials::validate_password_strength;
use linkhub_core::error::CoreError;
use linkhub_core::types::DbId;
use linkhub_db::models::admin::Admin;
use linkhub_db::repositories::AdminRepo;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};

/// Message shared by every login failure so callers cannot probe usernames.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Check a username/password pair and return the matching admin.
pub async fn authenticate(
    pool: &linkhub_db::DbPool,
    username: &str,
    password: &str,
) -> AppResult<Admin> {
    let admin = AdminRepo::find_by_username(pool, username)
        .await?
        .ok_or_else(|| CoreError::Unauthorized(INVALID_CREDENTIALS.into()))?;

    if !check_password(&admin, password)? {
        return Err(CoreError::Unauthorized(INVALID_CREDENTIALS.into()).into());
    }
    Ok(admin)
}

/// Replace an admin's password after verifying the current one.
///
/// Fails with `Unauthorized` if `current` does not match the stored hash and
/// with `Validation` if `new` is too short. The stored hash is untouched on
/// any failure.
pub async fn change_password(
    pool: &linkhub_db::DbPool,
    admin_id: DbId,
    current: &str,
    new: &str,
) -> AppResult<()> {
    let admin = AdminRepo::find_by_id(pool, admin_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Admin",
            id: admin_id,
        })?;

    if !check_password(&admin, current)? {
        return Err(CoreError::Unauthorized("Current password is incorrect".into()).into());
    }
    validate_password_strength(new)?;

    let hashed = hash_password(new)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    let updated = AdminRepo::update_password(pool, admin_id, &hashed).await?;
    if !updated {
        return Err(CoreError::NotFound {
            entity: "Admin",
            id: admin_id,
        }
        .into());
    }
    Ok(())
}

fn check_password(admin: &Admin, password: &str) -> AppResult<bool> {
    verify_password(password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))
}
