//! Repository for the `categories` table.
//!
//! Categories own their links: deleting one removes every link with its
//! `category_id` inside the same transaction.

use std::collections::HashMap;

use linkhub_core::ordering::resolve_order;
use linkhub_core::types::{DbId, Rank};
use sqlx::PgPool;

use crate::models::category::{
    Category, CategoryListFilter, CategoryWithLinks, CreateCategory, UpdateCategory,
};
use crate::repositories::LinkRepo;

/// Column list for the `categories` table.
const COLUMNS: &str = "id, name, \"order\", created_at, updated_at";

/// Provides CRUD and ordering operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    ///
    /// A non-positive `order` is replaced by one past the highest rank of
    /// all categories. The max read and the insert share a transaction but
    /// are not serialised: concurrent appends may land on the same rank.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let current_max: Option<Rank> =
            sqlx::query_scalar("SELECT MAX(\"order\") FROM categories")
                .fetch_one(&mut *tx)
                .await?;
        let order = resolve_order(input.order, current_max);

        let query = format!(
            "INSERT INTO categories (name, \"order\")
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(order)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(category)
    }

    /// Find a category by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a category with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM categories WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Find a category by ID, enriched with all of its links.
    pub async fn find_by_id_with_links(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CategoryWithLinks>, sqlx::Error> {
        let Some(category) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let links = LinkRepo::list_by_categories(pool, &[category.id], false).await?;
        Ok(Some(CategoryWithLinks { category, links }))
    }

    /// List categories by ascending rank, each with its nested links.
    ///
    /// Without `include_empty`, categories owning zero links are dropped.
    /// That check counts every link, active or not, so a category whose
    /// links are all inactive is still listed (with an empty `links` array
    /// when `active_links_only` is set).
    pub async fn list_with_links(
        pool: &PgPool,
        filter: CategoryListFilter,
    ) -> Result<Vec<CategoryWithLinks>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories c
             WHERE $1 OR EXISTS (SELECT 1 FROM links l WHERE l.category_id = c.id)
             ORDER BY \"order\" ASC, id ASC"
        );
        let categories = sqlx::query_as::<_, Category>(&query)
            .bind(filter.include_empty)
            .fetch_all(pool)
            .await?;

        let ids: Vec<DbId> = categories.iter().map(|c| c.id).collect();
        let links = LinkRepo::list_by_categories(pool, &ids, filter.active_links_only).await?;

        let mut grouped: HashMap<DbId, Vec<_>> = HashMap::new();
        for link in links {
            grouped.entry(link.category_id).or_default().push(link);
        }

        Ok(categories
            .into_iter()
            .map(|category| {
                let links = grouped.remove(&category.id).unwrap_or_default();
                CategoryWithLinks { category, links }
            })
            .collect())
    }

    /// Replace a category's name and rank.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET name = $2, \"order\" = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category and all of its links atomically.
    ///
    /// Returns `false` (and deletes nothing) if the category does not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let removed_links = sqlx::query("DELETE FROM links WHERE category_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected()
            > 0;

        if !deleted {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        tracing::debug!(category_id = id, removed_links, "Category deleted with its links");
        Ok(true)
    }
}
