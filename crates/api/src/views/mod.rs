//! Data payloads handed to the client-side renderer.
//!
//! The list projector lives here: persisted rows go in, display-ready
//! records come out. Projection is pure and never fails.

pub mod category;
pub mod product;

use serde::Serialize;

/// Filters echoed back on a list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListFilters {
    /// The normalized search term, or `null` when unfiltered.
    pub search: Option<String>,
}

/// Payload of a list page: `{ items, filters }`.
#[derive(Debug, Serialize)]
pub struct IndexView<T: Serialize> {
    pub items: Vec<T>,
    pub filters: ListFilters,
}

impl<T: Serialize> IndexView<T> {
    /// Project every row and pair the records with the active filters.
    pub fn project<R>(rows: Vec<R>, search: Option<String>) -> Self
    where
        R: Into<T>,
    {
        Self {
            items: rows.into_iter().map(Into::into).collect(),
            filters: ListFilters { search },
        }
    }
}
