//! Product model.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use catalog_core::types::{DbId, Timestamp};

use super::category::CategoryRef;

/// A row from the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A product joined to the name of its category, if it has one.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProductWithCategory {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub product: Product,
    pub category_name: Option<String>,
}

impl ProductWithCategory {
    /// The joined category, or `None` when the product is uncategorized.
    pub fn category(&self) -> Option<CategoryRef> {
        match (self.product.category_id, &self.category_name) {
            (Some(id), Some(name)) => Some(CategoryRef {
                id,
                name: name.clone(),
            }),
            _ => None,
        }
    }
}
