//! Startup seeding of the admin account.

use linkhub_core::credentials::validate_password_strength;
use linkhub_db::models::admin::{Admin, CreateAdmin};
use linkhub_db::repositories::AdminRepo;
use sqlx::PgPool;

use crate::auth::password::hash_password;
use crate::config::AdminSeed;
use crate::error::{AppError, AppResult};

/// Create the configured admin if no admin with that username exists.
///
/// Returns the new admin, or `None` when one was already present. Running it
/// on every startup is safe: an existing account (and its password) is never
/// touched.
pub async fn seed_admin(pool: &PgPool, seed: &AdminSeed) -> AppResult<Option<Admin>> {
    validate_password_strength(&seed.password)?;

    if AdminRepo::find_by_username(pool, &seed.username)
        .await?
        .is_some()
    {
        tracing::debug!(username = %seed.username, "Admin already exists, skipping seed");
        return Ok(None);
    }

    let password_hash = hash_password(&seed.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let admin = AdminRepo::create(
        pool,
        &CreateAdmin {
            username: seed.username.clone(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(admin_id = admin.id, username = %admin.username, "Seeded admin account");
    Ok(Some(admin))
}
