//! Repository for the `categories` table.

use sqlx::PgPool;
use catalog_core::category::CategoryInput;
use catalog_core::search::contains_pattern;
use catalog_core::types::DbId;

use crate::models::category::{Category, CategoryRef, CategoryWithCount};

/// Column list for the `categories` table.
const COLUMNS: &str = "id, name, slug, description, created_at, updated_at";

/// Column list for categories aggregated with their product count (alias `c`).
const COUNTED_COLUMNS: &str = "c.id, c.name, c.slug, c.description, c.created_at, c.updated_at, \
    COUNT(p.id) AS products_count";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List categories with their product counts, ordered by id.
    ///
    /// When `search` is a non-empty term, only categories whose name
    /// contains it (case-sensitive, matched literally) are returned.
    pub async fn list_with_counts(
        pool: &PgPool,
        search: Option<&str>,
    ) -> Result<Vec<CategoryWithCount>, sqlx::Error> {
        let from = "FROM categories c LEFT JOIN products p ON p.category_id = c.id";

        if let Some(term) = search.filter(|t| !t.is_empty()) {
            let query = format!(
                "SELECT {COUNTED_COLUMNS} {from} \
                 WHERE c.name LIKE $1 \
                 GROUP BY c.id \
                 ORDER BY c.id"
            );
            sqlx::query_as::<_, CategoryWithCount>(&query)
                .bind(contains_pattern(term))
                .fetch_all(pool)
                .await
        } else {
            let query = format!("SELECT {COUNTED_COLUMNS} {from} GROUP BY c.id ORDER BY c.id");
            sqlx::query_as::<_, CategoryWithCount>(&query)
                .fetch_all(pool)
                .await
        }
    }

    /// List `{id, name}` pairs for every category, ordered by name.
    pub async fn list_refs(pool: &PgPool) -> Result<Vec<CategoryRef>, sqlx::Error> {
        sqlx::query_as::<_, CategoryRef>("SELECT id, name FROM categories ORDER BY name, id")
            .fetch_all(pool)
            .await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a category with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Whether a category other than `exclude_id` already uses `slug`.
    pub async fn slug_exists(
        pool: &PgPool,
        slug: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(\
                SELECT 1 FROM categories \
                WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2)\
             )",
        )
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Insert a new category, returning the created row.
    pub async fn create(pool: &PgPool, input: &CategoryInput) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, slug, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Replace every mutable field of a category, re-deriving its slug.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CategoryInput,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET \
                name = $2, \
                slug = $3, \
                description = $4, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID. Returns `true` if a row was deleted.
    ///
    /// Products referencing the category are kept and become uncategorized.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
