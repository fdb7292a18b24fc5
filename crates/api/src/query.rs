//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for list pages (`?search=`).
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

impl SearchParams {
    /// The effective filter: trimmed, with blank terms treated as no filter.
    pub fn term(&self) -> Option<String> {
        catalog_core::search::normalize_term(self.search.as_deref())
    }
}
