//! Route definitions for categories.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Public read-only listing.
///
/// ```text
/// GET /links  -> list_public (?includeEmpty=true)
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/links", get(category::list_public))
}

/// Admin category routes.
///
/// ```text
/// GET    /categories     -> list (?includeEmpty=true)
/// POST   /category       -> create
/// GET    /category/{id}  -> get_by_id
/// PATCH  /category/{id}  -> update
/// DELETE /category/{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(category::list))
        .route("/category", post(category::create))
        .route(
            "/category/{id}",
            get(category::get_by_id)
                .patch(category::update)
                .delete(category::delete),
        )
}
