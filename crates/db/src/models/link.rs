//! Link entity model and DTOs.

use linkhub_core::types::{DbId, Rank, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `links` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Link {
    pub id: DbId,
    pub title: String,
    pub url: String,
    pub order: Rank,
    pub is_active: bool,
    pub category_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

fn default_active() -> bool {
    true
}

/// DTO for creating a link.
///
/// `category_id` is accepted for client convenience but always overwritten
/// with the category from the URL path.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLink {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
    #[serde(default)]
    pub order: Rank,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub category_id: DbId,
}

/// DTO for updating a link. Replaces every field; the owning category never
/// changes through an update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateLink {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
    #[serde(default)]
    pub order: Rank,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub category_id: DbId,
}
