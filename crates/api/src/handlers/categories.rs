//! Handlers for the `/categories` resource.
//!
//! Categories carry a slug derived from their name; the form validator
//! rejects names whose slug another category already owns.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_db::repositories::CategoryRepo;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::forms::validate_category;
use crate::query::SearchParams;
use crate::response::{DataResponse, Deleted, MutationResponse};
use crate::state::AppState;
use crate::views::category::{CategoryCreateView, CategoryEditView, CategoryListItem};
use crate::views::IndexView;

const ENTITY: &str = "Category";
const INDEX_ROUTE: &str = "/categories";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// GET /categories?search=
///
/// List categories with their product counts, optionally filtered by name.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let search = params.term();
    let rows = CategoryRepo::list_with_counts(&state.pool, search.as_deref()).await?;
    let view = IndexView::<CategoryListItem>::project(rows, search);
    Ok(Json(DataResponse { data: view }))
}

/// GET /categories/create
pub async fn create() -> impl IntoResponse {
    Json(DataResponse {
        data: CategoryCreateView::default(),
    })
}

/// POST /categories
pub async fn store(
    State(state): State<AppState>,
    AppJson(form): AppJson<Map<String, Value>>,
) -> AppResult<impl IntoResponse> {
    let input = validate_category(&state, &form, None).await?;
    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(category_id = category.id, slug = %category.slug, "Category created");

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            data: category,
            message: "Category created successfully.",
            redirect_to: INDEX_ROUTE,
        }),
    ))
}

/// GET /categories/{id}/edit
pub async fn edit(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: CategoryEditView {
            item: category.into(),
        },
    }))
}

/// PUT /categories/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(form): AppJson<Map<String, Value>>,
) -> AppResult<impl IntoResponse> {
    if !CategoryRepo::exists(&state.pool, id).await? {
        return Err(not_found(id));
    }

    let input = validate_category(&state, &form, Some(id)).await?;
    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(category_id = id, slug = %category.slug, "Category updated");

    Ok(Json(MutationResponse {
        data: category,
        message: "Category updated successfully.",
        redirect_to: INDEX_ROUTE,
    }))
}

/// DELETE /categories/{id}
///
/// Products in the category are kept and become uncategorized.
pub async fn destroy(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !CategoryRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(category_id = id, "Category deleted");

    Ok(Json(MutationResponse {
        data: Deleted { id },
        message: "Category deleted successfully.",
        redirect_to: INDEX_ROUTE,
    }))
}
