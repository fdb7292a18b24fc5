//! Product form rules and the validated product input.

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::{evaluate, Evaluation, FieldKind, FieldRule, FieldValues};

pub const FIELD_NAME: &str = "name";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_PRICE: &str = "price";
pub const FIELD_CATEGORY_ID: &str = "category_id";

/// Maximum product name length, in characters.
pub const MAX_NAME_CHARS: u64 = 255;

/// Rule table for product create and update forms.
pub const RULES: &[FieldRule] = &[
    FieldRule {
        field: FIELD_NAME,
        required: true,
        kind: FieldKind::Text {
            max_chars: Some(MAX_NAME_CHARS),
        },
    },
    FieldRule {
        field: FIELD_DESCRIPTION,
        required: true,
        kind: FieldKind::Text { max_chars: None },
    },
    FieldRule {
        field: FIELD_PRICE,
        required: true,
        kind: FieldKind::Decimal {
            min: Some(Decimal::ZERO),
        },
    },
    FieldRule {
        field: FIELD_CATEGORY_ID,
        required: true,
        kind: FieldKind::Reference,
    },
];

/// Message attached to `category_id` when the referenced category does not exist.
pub const INVALID_CATEGORY_MESSAGE: &str = "The selected category id is invalid.";

/// Validated values for a product write. Updates replace every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: DbId,
}

impl ProductInput {
    /// Build the input from a fully valid evaluation of [`RULES`].
    pub fn from_values(mut values: FieldValues) -> Result<Self, CoreError> {
        let price = values.decimal(FIELD_PRICE).ok_or_else(|| missing(FIELD_PRICE))?;
        let category_id = values
            .reference(FIELD_CATEGORY_ID)
            .ok_or_else(|| missing(FIELD_CATEGORY_ID))?;
        Ok(Self {
            name: values.take_text(FIELD_NAME).ok_or_else(|| missing(FIELD_NAME))?,
            description: values
                .take_text(FIELD_DESCRIPTION)
                .ok_or_else(|| missing(FIELD_DESCRIPTION))?,
            price,
            category_id,
        })
    }
}

/// Run the product rule table against a submitted form.
pub fn evaluate_form(form: &Map<String, Value>) -> Evaluation {
    evaluate(RULES, form)
}

fn missing(field: &str) -> CoreError {
    CoreError::Internal(format!("validated product form is missing '{field}'"))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn form(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn negative_price_is_reported_on_price() {
        let eval = evaluate_form(&form(json!({
            "name": "Pen",
            "description": "Blue ink",
            "price": -1,
            "category_id": 1,
        })));
        assert_eq!(eval.errors.first(FIELD_PRICE), Some("The price field must be at least 0."));
        assert_eq!(eval.errors.len(), 1);
    }

    #[test]
    fn missing_category_is_reported_on_category_id() {
        let eval = evaluate_form(&form(json!({
            "name": "Pen",
            "description": "Blue ink",
            "price": "1.50",
        })));
        assert_eq!(
            eval.errors.first(FIELD_CATEGORY_ID),
            Some("The category id field is required.")
        );
    }

    #[test]
    fn name_longer_than_limit_is_rejected() {
        let eval = evaluate_form(&form(json!({
            "name": "x".repeat(256),
            "description": "d",
            "price": 1,
            "category_id": 1,
        })));
        assert_eq!(
            eval.errors.first(FIELD_NAME),
            Some("The name field must not be greater than 255 characters.")
        );
    }

    #[test]
    fn valid_form_builds_typed_input() {
        let eval = evaluate_form(&form(json!({
            "name": " Pen ",
            "description": "Blue ink",
            "price": "1.5",
            "category_id": "2",
        })));
        let input = ProductInput::from_values(eval.into_result().expect("valid form"))
            .expect("complete values");
        assert_eq!(
            input,
            ProductInput {
                name: "Pen".into(),
                description: "Blue ink".into(),
                price: Decimal::new(15, 1),
                category_id: 2,
            }
        );
    }

    #[test]
    fn incomplete_values_are_an_internal_error() {
        assert_matches!(
            ProductInput::from_values(FieldValues::default()),
            Err(CoreError::Internal(_))
        );
    }
}
