//! Route definitions for the `/products` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Routes mounted at `/products`.
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
        .route("/", get(products::index).post(products::store))
        .route("/create", get(products::create))
        .route(
            "/{id}",
            put(products::update).delete(products::destroy),
        )
        .route("/{id}/edit", get(products::edit))
}
