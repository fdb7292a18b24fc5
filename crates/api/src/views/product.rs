//! Product list records and form payloads.

use catalog_core::formatting::{format_date, format_price};
use catalog_core::types::DbId;
use catalog_db::models::category::CategoryRef;
use catalog_db::models::product::{Product, ProductWithCategory};
use serde::Serialize;

/// A product as shown on the list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductListItem {
    pub id: DbId,
    pub name: String,
    pub description: String,
    /// Two decimals with thousands separators, e.g. `"1,234.50"`.
    pub price: String,
    pub category: Option<CategoryRef>,
    /// `YYYY-MM-DD`.
    pub created_at: String,
}

impl From<ProductWithCategory> for ProductListItem {
    fn from(row: ProductWithCategory) -> Self {
        let category = row.category();
        let product = row.product;
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: format_price(product.price),
            category,
            created_at: format_date(product.created_at),
        }
    }
}

/// Payload of the product create page.
#[derive(Debug, Serialize)]
pub struct ProductCreateView {
    pub categories: Vec<CategoryRef>,
}

/// The mutable fields of a product, prefilled into the edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditableProduct {
    pub id: DbId,
    pub name: String,
    pub description: String,
    /// Plain decimal text, e.g. `"1234.50"`, so it round-trips through the form.
    pub price: String,
    pub category_id: Option<DbId>,
}

impl From<Product> for EditableProduct {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price.to_string(),
            category_id: product.category_id,
        }
    }
}

/// Payload of the product edit page.
#[derive(Debug, Serialize)]
pub struct ProductEditView {
    pub item: EditableProduct,
    pub categories: Vec<CategoryRef>,
}
