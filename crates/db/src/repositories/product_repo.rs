//! Repository for the `products` table.

use sqlx::PgPool;
use catalog_core::product::ProductInput;
use catalog_core::search::contains_pattern;
use catalog_core::types::DbId;

use crate::models::product::{Product, ProductWithCategory};

/// Column list for the `products` table.
const COLUMNS: &str = "id, name, description, price, category_id, created_at, updated_at";

/// Column list for products joined to their category (aliases `p` and `c`).
const JOINED_COLUMNS: &str = "p.id, p.name, p.description, p.price, p.category_id, \
    p.created_at, p.updated_at, c.name AS category_name";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// List products with their category, ordered by id.
    ///
    /// When `search` is a non-empty term, only products whose name contains
    /// it (case-sensitive, matched literally) are returned.
    pub async fn list_with_category(
        pool: &PgPool,
        search: Option<&str>,
    ) -> Result<Vec<ProductWithCategory>, sqlx::Error> {
        let from = "FROM products p LEFT JOIN categories c ON c.id = p.category_id";

        if let Some(term) = search.filter(|t| !t.is_empty()) {
            let query = format!(
                "SELECT {JOINED_COLUMNS} {from} \
                 WHERE p.name LIKE $1 \
                 ORDER BY p.id"
            );
            sqlx::query_as::<_, ProductWithCategory>(&query)
                .bind(contains_pattern(term))
                .fetch_all(pool)
                .await
        } else {
            let query = format!("SELECT {JOINED_COLUMNS} {from} ORDER BY p.id");
            sqlx::query_as::<_, ProductWithCategory>(&query)
                .fetch_all(pool)
                .await
        }
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new product, returning the created row.
    pub async fn create(pool: &PgPool, input: &ProductInput) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, description, price, category_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.category_id)
            .fetch_one(pool)
            .await
    }

    /// Replace every mutable field of a product.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProductInput,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET \
                name = $2, \
                description = $3, \
                price = $4, \
                category_id = $5, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.category_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
