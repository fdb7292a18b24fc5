//! Route definitions for the `/categories` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET    /             -> index
/// POST   /             -> store
/// GET    /create       -> create
/// PUT    /{id}         -> update
/// DELETE /{id}         -> destroy
/// GET    /{id}/edit    -> edit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::index).post(categories::store))
        .route("/create", get(categories::create))
        .route("/{id}", put(categories::update).delete(categories::destroy))
        .route("/{id}/edit", get(categories::edit))
}
