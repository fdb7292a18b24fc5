pub mod categories;
pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the catalog resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /products                      list (?search=), store
/// /products/create               create form payload
/// /products/{id}                 update, destroy
/// /products/{id}/edit            edit form payload
///
/// /categories                    list (?search=), store
/// /categories/create             create form payload
/// /categories/{id}               update, destroy
/// /categories/{id}/edit          edit form payload
/// ```
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/categories", categories::router())
}
