//! Form validation that needs the database.
//!
//! The rule tables in `catalog_core` are pure. The checks here add the
//! lookups they cannot do on their own (category existence, slug
//! uniqueness) and fold every failure into a single
//! [`CoreError::Validation`].

use catalog_core::category::{self, CategoryInput};
use catalog_core::error::CoreError;
use catalog_core::product::{self, ProductInput};
use catalog_core::types::DbId;
use catalog_db::repositories::CategoryRepo;
use serde_json::{Map, Value};

use crate::error::AppResult;
use crate::state::AppState;

/// Validate a product form, returning the typed input on success.
///
/// The category lookup only runs when `category_id` passed its own rule,
/// so a malformed id reports a single message.
pub async fn validate_product(
    state: &AppState,
    form: &Map<String, Value>,
) -> AppResult<ProductInput> {
    let mut evaluation = product::evaluate_form(form);

    if let Some(category_id) = evaluation.values.reference(product::FIELD_CATEGORY_ID) {
        if !CategoryRepo::exists(&state.pool, category_id).await? {
            evaluation
                .errors
                .add(product::FIELD_CATEGORY_ID, product::INVALID_CATEGORY_MESSAGE);
        }
    }

    let values = evaluation.into_result().map_err(CoreError::Validation)?;
    Ok(ProductInput::from_values(values)?)
}

/// Validate a category form, returning the typed input on success.
///
/// `exclude_id` is the category being edited, so keeping its own name does
/// not count as a slug collision.
pub async fn validate_category(
    state: &AppState,
    form: &Map<String, Value>,
    exclude_id: Option<DbId>,
) -> AppResult<CategoryInput> {
    let mut evaluation = category::evaluate_form(form);

    if let Some(name) = evaluation.values.text(category::FIELD_NAME) {
        let slug = category::generate_slug(name);
        if CategoryRepo::slug_exists(&state.pool, &slug, exclude_id).await? {
            evaluation
                .errors
                .add(category::FIELD_NAME, category::NAME_TAKEN_MESSAGE);
        }
    }

    let values = evaluation.into_result().map_err(CoreError::Validation)?;
    Ok(CategoryInput::from_values(values)?)
}
