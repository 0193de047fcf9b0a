//! Handlers for links.
//!
//! Links are nested under categories for every mutation:
//! `/categories/{category_id}/links[/{link_id}]`. The flat `/links/all` and
//! `/links/{id}` reads are admin-only.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use linkhub_core::error::CoreError;
use linkhub_core::types::DbId;
use linkhub_db::models::link::{CreateLink, Link, UpdateLink};
use linkhub_db::repositories::LinkRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::MessageResponse;
use crate::state::AppState;

fn link_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Link", id })
}

fn category_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}

/// GET /api/links/all
///
/// Every link in every category, active or not.
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Link>>> {
    let links = LinkRepo::list_all(&state.pool).await?;
    Ok(Json(links))
}

/// GET /api/links/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<u32>,
) -> AppResult<Json<Link>> {
    let id = DbId::from(id);
    let link = LinkRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| link_not_found(id))?;
    Ok(Json(link))
}

/// GET /api/categories/{category_id}/links
///
/// Active links of one category by rank.
pub async fn list_by_category(
    State(state): State<AppState>,
    AppPath(category_id): AppPath<u32>,
) -> AppResult<Json<Vec<Link>>> {
    let category_id = DbId::from(category_id);
    let links = LinkRepo::list_active_by_category(&state.pool, category_id)
        .await?
        .ok_or_else(|| category_not_found(category_id))?;
    Ok(Json(links))
}

/// POST /api/categories/{category_id}/links
///
/// Overrides `input.category_id` with the value from the URL path to ensure
/// the link is created under the correct category.
pub async fn create(
    State(state): State<AppState>,
    AppPath(category_id): AppPath<u32>,
    AppJson(mut input): AppJson<CreateLink>,
) -> AppResult<(StatusCode, Json<Link>)> {
    let category_id = DbId::from(category_id);
    input.validate()?;
    input.category_id = category_id;

    let link = LinkRepo::create(&state.pool, category_id, &input)
        .await?
        .ok_or_else(|| category_not_found(category_id))?;
    tracing::info!(link_id = link.id, category_id, order = link.order, "Link created");
    Ok((StatusCode::CREATED, Json(link)))
}

/// PATCH /api/categories/{category_id}/links/{link_id}
///
/// Replaces every field. A link that exists under another category is
/// reported as not found.
pub async fn update(
    State(state): State<AppState>,
    AppPath((category_id, link_id)): AppPath<(u32, u32)>,
    AppJson(mut input): AppJson<UpdateLink>,
) -> AppResult<Json<Link>> {
    let (category_id, link_id) = (DbId::from(category_id), DbId::from(link_id));
    input.validate()?;
    input.category_id = category_id;

    let link = LinkRepo::update(&state.pool, category_id, link_id, &input)
        .await?
        .ok_or_else(|| link_not_found(link_id))?;
    tracing::info!(link_id, category_id, "Link updated");
    Ok(Json(link))
}

/// DELETE /api/categories/{category_id}/links/{link_id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath((category_id, link_id)): AppPath<(u32, u32)>,
) -> AppResult<Json<MessageResponse>> {
    let (category_id, link_id) = (DbId::from(category_id), DbId::from(link_id));
    if !LinkRepo::delete(&state.pool, category_id, link_id).await? {
        return Err(link_not_found(link_id));
    }
    tracing::info!(link_id, category_id, "Link deleted");
    Ok(Json(MessageResponse::new("Link deleted successfully")))
}
