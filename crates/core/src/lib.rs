//! Catalog domain logic.
//!
//! Pure building blocks shared by the repository and HTTP layers: id and
//! timestamp aliases, the domain error type, the rule-table validation
//! engine, the product/category input rules, and display formatting.

pub mod category;
pub mod error;
pub mod formatting;
pub mod product;
pub mod search;
pub mod types;
pub mod validation;
