//! Repository for the `links` table.
//!
//! Every mutation is scoped by the owning category: a link is addressed by
//! the pair `(category_id, id)` and never moves between categories.

use linkhub_core::ordering::resolve_order;
use linkhub_core::types::{DbId, Rank};
use sqlx::PgPool;

use crate::models::link::{CreateLink, Link, UpdateLink};
use crate::repositories::CategoryRepo;

/// Column list for the `links` table.
const COLUMNS: &str =
    "id, title, url, \"order\", is_active, category_id, created_at, updated_at";

/// Provides CRUD and ordering operations for links.
pub struct LinkRepo;

impl LinkRepo {
    /// Insert a new link under `category_id`.
    ///
    /// The parent row is locked (`FOR UPDATE`) for the duration of the
    /// transaction, which serialises rank assignment per category and keeps
    /// the parent from being deleted mid-insert. `input.category_id` is
    /// ignored. Returns `None` if the category does not exist.
    pub async fn create(
        pool: &PgPool,
        category_id: DbId,
        input: &CreateLink,
    ) -> Result<Option<Link>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let parent: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM categories WHERE id = $1 FOR UPDATE")
                .bind(category_id)
                .fetch_optional(&mut *tx)
                .await?;
        if parent.is_none() {
            return Ok(None);
        }

        let current_max: Option<Rank> =
            sqlx::query_scalar("SELECT MAX(\"order\") FROM links WHERE category_id = $1")
                .bind(category_id)
                .fetch_one(&mut *tx)
                .await?;
        let order = resolve_order(input.order, current_max);

        let query = format!(
            "INSERT INTO links (title, url, \"order\", is_active, category_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let link = sqlx::query_as::<_, Link>(&query)
            .bind(&input.title)
            .bind(&input.url)
            .bind(order)
            .bind(input.is_active)
            .bind(category_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(link))
    }

    /// Find a link by its internal ID, regardless of category.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Link>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM links WHERE id = $1");
        sqlx::query_as::<_, Link>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every link (active and inactive) grouped by category, then rank.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Link>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM links ORDER BY category_id ASC, \"order\" ASC, id ASC"
        );
        sqlx::query_as::<_, Link>(&query).fetch_all(pool).await
    }

    /// List the active links of one category by ascending rank.
    ///
    /// Returns `None` if the category does not exist.
    pub async fn list_active_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Option<Vec<Link>>, sqlx::Error> {
        if !CategoryRepo::exists(pool, category_id).await? {
            return Ok(None);
        }
        Self::list_by_categories(pool, &[category_id], true)
            .await
            .map(Some)
    }

    /// List the links of several categories, sorted by category then rank.
    pub async fn list_by_categories(
        pool: &PgPool,
        category_ids: &[DbId],
        active_only: bool,
    ) -> Result<Vec<Link>, sqlx::Error> {
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM links
             WHERE category_id = ANY($1) AND (NOT $2 OR is_active)
             ORDER BY category_id ASC, \"order\" ASC, id ASC"
        );
        sqlx::query_as::<_, Link>(&query)
            .bind(category_ids)
            .bind(active_only)
            .fetch_all(pool)
            .await
    }

    /// Replace every field of the link `(category_id, id)`.
    ///
    /// `input.category_id` is ignored. Returns `None` if the link does not
    /// exist or belongs to another category.
    pub async fn update(
        pool: &PgPool,
        category_id: DbId,
        id: DbId,
        input: &UpdateLink,
    ) -> Result<Option<Link>, sqlx::Error> {
        let query = format!(
            "UPDATE links SET
                title = $3,
                url = $4,
                \"order\" = $5,
                is_active = $6
             WHERE id = $1 AND category_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Link>(&query)
            .bind(id)
            .bind(category_id)
            .bind(&input.title)
            .bind(&input.url)
            .bind(input.order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete the link `(category_id, id)`.
    ///
    /// Returns `false` if it does not exist or belongs to another category.
    pub async fn delete(pool: &PgPool, category_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM links WHERE id = $1 AND category_id = $2")
            .bind(id)
            .bind(category_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
