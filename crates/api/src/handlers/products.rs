//! Handlers for the `/products` resource.
//!
//! List, form payloads, and the validate-then-persist mutations.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_db::repositories::{CategoryRepo, ProductRepo};
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::forms::validate_product;
use crate::query::SearchParams;
use crate::response::{DataResponse, Deleted, MutationResponse};
use crate::state::AppState;
use crate::views::product::{ProductCreateView, ProductEditView, ProductListItem};
use crate::views::IndexView;

const ENTITY: &str = "Product";
const INDEX_ROUTE: &str = "/products";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /products?search=
///
/// List products with their category, optionally filtered by name.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let search = params.term();
    let rows = ProductRepo::list_with_category(&state.pool, search.as_deref()).await?;
    let view = IndexView::<ProductListItem>::project(rows, search);
    Ok(Json(DataResponse { data: view }))
}

/// GET /products/create
pub async fn create(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list_refs(&state.pool).await?;
    Ok(Json(DataResponse {
        data: ProductCreateView { categories },
    }))
}

/// POST /products
pub async fn store(
    State(state): State<AppState>,
    AppJson(form): AppJson<Map<String, Value>>,
) -> AppResult<impl IntoResponse> {
    let input = validate_product(&state, &form).await?;
    let product = ProductRepo::create(&state.pool, &input).await?;

    tracing::info!(product_id = product.id, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            data: product,
            message: "Product created successfully.",
            redirect_to: INDEX_ROUTE,
        }),
    ))
}

/// GET /products/{id}/edit
pub async fn edit(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let categories = CategoryRepo::list_refs(&state.pool).await?;
    Ok(Json(DataResponse {
        data: ProductEditView {
            item: product.into(),
            categories,
        },
    }))
}

/// PUT /products/{id}
///
/// Full replacement of the mutable fields. A missing product is reported
/// before the form is validated.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(form): AppJson<Map<String, Value>>,
) -> AppResult<impl IntoResponse> {
    ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let input = validate_product(&state, &form).await?;
    let product = ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(product_id = id, "Product updated");

    Ok(Json(MutationResponse {
        data: product,
        message: "Product updated successfully.",
        redirect_to: INDEX_ROUTE,
    }))
}

/// DELETE /products/{id}
pub async fn destroy(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ProductRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(product_id = id, "Product deleted");

    Ok(Json(MutationResponse {
        data: Deleted { id },
        message: "Product deleted successfully.",
        redirect_to: INDEX_ROUTE,
    }))
}
