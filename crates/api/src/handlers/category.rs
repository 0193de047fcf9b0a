//! Handlers for the category collection.
//!
//! Public: `GET /links` (categories with their active links).
//! Admin: `/categories` and `/category/{id}`.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use linkhub_core::error::CoreError;
use linkhub_core::types::DbId;
use linkhub_db::models::category::{
    Category, CategoryListFilter, CategoryWithLinks, CreateCategory, UpdateCategory,
};
use linkhub_db::repositories::CategoryRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::query::IncludeEmptyParams;
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}

/// GET /api/links
///
/// Public listing: categories by rank, each with its active links.
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<IncludeEmptyParams>,
) -> AppResult<Json<Vec<CategoryWithLinks>>> {
    let filter = CategoryListFilter {
        include_empty: params.include_empty(),
        active_links_only: true,
    };
    let categories = CategoryRepo::list_with_links(&state.pool, filter).await?;
    Ok(Json(categories))
}

/// GET /api/categories
///
/// Admin listing: categories by rank, each with all of its links.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IncludeEmptyParams>,
) -> AppResult<Json<Vec<CategoryWithLinks>>> {
    let filter = CategoryListFilter {
        include_empty: params.include_empty(),
        active_links_only: false,
    };
    let categories = CategoryRepo::list_with_links(&state.pool, filter).await?;
    Ok(Json(categories))
}

/// GET /api/category/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<u32>,
) -> AppResult<Json<CategoryWithLinks>> {
    let id = DbId::from(id);
    let category = CategoryRepo::find_by_id_with_links(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(category))
}

/// POST /api/category
///
/// An `order` of zero or less appends after the current highest rank.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    input.validate()?;
    let category = CategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(category_id = category.id, order = category.order, "Category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// PATCH /api/category/{id}
///
/// Replaces both name and order.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<u32>,
    AppJson(input): AppJson<UpdateCategory>,
) -> AppResult<Json<Category>> {
    let id = DbId::from(id);
    input.validate()?;
    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(category_id = id, "Category updated");
    Ok(Json(category))
}

/// DELETE /api/category/{id}
///
/// Removes the category and every link it owns.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<u32>,
) -> AppResult<Json<MessageResponse>> {
    let id = DbId::from(id);
    if !CategoryRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(category_id = id, "Category deleted");
    Ok(Json(MessageResponse::new("Category deleted successfully")))
}
