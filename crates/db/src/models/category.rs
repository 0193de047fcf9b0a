//! Category entity model and DTOs.

use linkhub_core::types::{DbId, Rank, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::link::Link;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub order: Rank,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A category together with the links it owns, each sorted by rank.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryWithLinks {
    #[serde(flatten)]
    pub category: Category,
    pub links: Vec<Link>,
}

/// DTO for creating a category.
///
/// An `order` of zero or less (or an omitted one) appends the category after
/// the current highest rank.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    pub order: Rank,
}

/// DTO for updating a category. Replaces both fields.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategory {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    pub order: Rank,
}

/// Which categories to list and which of their links to nest.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryListFilter {
    /// Keep categories that own no links at all.
    pub include_empty: bool,
    /// Nest only links with `is_active = true`.
    pub active_links_only: bool,
}
