//! Category form rules, slug generation, and the validated category input.

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::validation::{evaluate, Evaluation, FieldKind, FieldRule, FieldValues};

pub const FIELD_NAME: &str = "name";
pub const FIELD_DESCRIPTION: &str = "description";

/// Maximum category name length, in characters.
pub const MAX_NAME_CHARS: u64 = 255;

/// Rule table for category create and update forms.
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
        required: false,
        kind: FieldKind::Text { max_chars: None },
    },
];

/// Attached to `name` when another category already owns the derived slug.
pub const NAME_TAKEN_MESSAGE: &str = "The name has already been taken.";

/// Validated values for a category write. The slug is always derived from the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInput {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl CategoryInput {
    /// Build the input from a fully valid evaluation of [`RULES`].
    pub fn from_values(mut values: FieldValues) -> Result<Self, CoreError> {
        let name = values.take_text(FIELD_NAME).ok_or_else(|| {
            CoreError::Internal(format!("validated category form is missing '{FIELD_NAME}'"))
        })?;
        Ok(Self {
            slug: generate_slug(&name),
            description: values.take_text(FIELD_DESCRIPTION),
            name,
        })
    }
}

/// Run the category rule table against a submitted form.
pub fn evaluate_form(form: &Map<String, Value>) -> Evaluation {
    evaluate(RULES, form)
}

/// Generate a URL-safe slug from a category name.
///
/// Transliterates to ASCII, lowercases, turns `@` into `-at-`, replaces every
/// other non-alphanumeric character with a hyphen, collapses runs of hyphens,
/// and trims them from both ends. `"Office & School Supplies"` becomes
/// `"office-school-supplies"` and `"Café"` becomes `"cafe"`.
///
/// A name with nothing left after that (only punctuation or symbols without
/// a transliteration) falls back to the hex code points of its characters,
/// so distinct names still get distinct, non-empty slugs.
pub fn generate_slug(name: &str) -> String {
    let lowered = deunicode::deunicode(name)
        .to_lowercase()
        .replace('@', "-at-");

    let mut slug = String::with_capacity(lowered.len());
    let mut prev_hyphen = true;
    for c in lowered.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            prev_hyphen = false;
        } else if !prev_hyphen {
            slug.push('-');
            prev_hyphen = true;
        }
    }

    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        code_point_slug(name.trim())
    } else {
        slug.to_string()
    }
}

fn code_point_slug(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| format!("{:x}", u32::from(c)))
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn slug_basic() {
        assert_eq!(generate_slug("Office Supplies"), "office-supplies");
    }

    #[test]
    fn slug_collapses_punctuation() {
        assert_eq!(generate_slug("Office & School -- Supplies"), "office-school-supplies");
    }

    #[test]
    fn slug_trims_edges() {
        assert_eq!(generate_slug("  --Books!!  "), "books");
    }

    #[test]
    fn slug_spells_out_at_sign() {
        assert_eq!(generate_slug("Work@Home"), "work-at-home");
    }

    #[test]
    fn slug_folds_accents() {
        assert_eq!(generate_slug("Café"), "cafe");
        assert_ne!(generate_slug("Café"), generate_slug("Caf"));
    }

    #[test]
    fn slug_transliterates_non_latin_names() {
        for name in ["日本語", "Ελληνικά", "Книги"] {
            let slug = generate_slug(name);
            assert!(!slug.is_empty(), "{name} produced an empty slug");
            assert!(
                slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'),
                "{name} produced {slug}"
            );
        }
    }

    #[test]
    fn slug_of_symbols_falls_back_to_code_points() {
        assert_eq!(generate_slug("!!!"), "21-21-21");
        assert_ne!(generate_slug("!!!"), generate_slug("!?"));
    }

    #[test]
    fn description_is_optional() {
        let eval = evaluate_form(json!({"name": "Books"}).as_object().expect("object"));
        let input = CategoryInput::from_values(eval.into_result().expect("valid"))
            .expect("complete values");
        assert_eq!(
            input,
            CategoryInput {
                name: "Books".into(),
                slug: "books".into(),
                description: None,
            }
        );
    }

    #[test]
    fn name_is_required_and_description_must_be_text() {
        let eval = evaluate_form(
            json!({"name": "", "description": 12})
                .as_object()
                .expect("object"),
        );
        assert_eq!(eval.errors.first(FIELD_NAME), Some("The name field is required."));
        assert_eq!(
            eval.errors.first(FIELD_DESCRIPTION),
            Some("The description field must be a string.")
        );
    }
}
