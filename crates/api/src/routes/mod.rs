pub mod auth;
pub mod category;
pub mod health;
pub mod link;

use axum::middleware::from_fn_with_state;
use axum::Router;

use crate::middleware::auth::require_session;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /links                                           public listing (GET)
/// /login                                           login (POST, public)
///
/// /logout                                          logout (POST)
/// /change-password                                 change password (PATCH)
///
/// /categories                                      admin listing (GET)
/// /category                                        create (POST)
/// /category/{id}                                   get, update, delete
///
/// /links/all                                       every link (GET)
/// /links/{id}                                      one link (GET)
/// /categories/{category_id}/links                  list active, create
/// /categories/{category_id}/links/{link_id}        update, delete
/// ```
///
/// Everything except `/links` and `/login` sits behind [`require_session`].
/// The gate is a route layer, so unknown paths still fall through to 404.
pub fn api_routes(state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .merge(category::public_router())
        .merge(auth::public_router());

    let protected = Router::new()
        .merge(auth::router())
        .merge(category::router())
        .merge(link::router())
        .route_layer(from_fn_with_state(state.clone(), require_session));

    public.merge(protected)
}
