//! Row structs for the catalog tables.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! table row, plus the enriched shapes the list queries return. Write
//! inputs live in `catalog_core` next to their validation rules.

pub mod category;
pub mod product;
