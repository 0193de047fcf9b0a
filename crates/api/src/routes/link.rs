//! Route definitions for links.
//!
//! Mutations are scoped to the owning category under
//! `/categories/{category_id}/links`.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::link;
use crate::state::AppState;

/// Admin link routes.
///
/// ```text
/// GET    /links/all                                  -> list_all
/// GET    /links/{id}                                 -> get_by_id
/// GET    /categories/{category_id}/links             -> list_by_category
/// POST   /categories/{category_id}/links             -> create
/// PATCH  /categories/{category_id}/links/{link_id}   -> update
/// DELETE /categories/{category_id}/links/{link_id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    let scoped = Router::new()
        .route("/", get(link::list_by_category).post(link::create))
        .route("/{link_id}", patch(link::update).delete(link::delete));

    Router::new()
        .route("/links/all", get(link::list_all))
        .route("/links/{id}", get(link::get_by_id))
        .nest("/categories/{category_id}/links", scoped)
}
