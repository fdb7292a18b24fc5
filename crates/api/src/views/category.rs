//! Category list records and form payloads.

use catalog_core::formatting::format_date;
use catalog_core::types::DbId;
use catalog_db::models::category::{Category, CategoryWithCount};
use serde::Serialize;

/// A category as shown on the list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListItem {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub products_count: i64,
    pub created_at: String,
}

impl From<CategoryWithCount> for CategoryListItem {
    fn from(row: CategoryWithCount) -> Self {
        let category = row.category;
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
            description: category.description,
            products_count: row.products_count,
            created_at: format_date(category.created_at),
        }
    }
}

/// Payload of the category create page. Categories need no option lists.
#[derive(Debug, Default, Serialize)]
pub struct CategoryCreateView {}

/// The mutable fields of a category, prefilled into the edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditableCategory {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl From<Category> for EditableCategory {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
            description: category.description,
        }
    }
}

/// Payload of the category edit page.
#[derive(Debug, Serialize)]
pub struct CategoryEditView {
    pub item: EditableCategory,
}
