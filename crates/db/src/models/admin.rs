//! Admin entity model and DTOs.

use linkhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full row from the `admins` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`AdminInfo`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    /// Sessions issued before this instant are no longer honoured.
    pub password_changed_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe admin representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct AdminInfo {
    pub id: DbId,
    pub username: String,
}

impl From<&Admin> for AdminInfo {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            username: admin.username.clone(),
        }
    }
}

/// DTO for inserting an admin. Only used by bootstrap seeding.
#[derive(Debug, Clone)]
pub struct CreateAdmin {
    pub username: String,
    pub password_hash: String,
}
