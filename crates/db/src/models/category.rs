//! Category model.

use serde::Serialize;
use sqlx::FromRow;
use catalog_core::types::{DbId, Timestamp};

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A category together with the number of products that reference it.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CategoryWithCount {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub category: Category,
    pub products_count: i64,
}

/// The `{id, name}` pair used for select options and nested summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct CategoryRef {
    pub id: DbId,
    pub name: String,
}
