//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values. The constraint
//! cases provoke real database errors through the repositories.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use catalog_api::error::AppError;
use catalog_core::error::CoreError;
use catalog_core::category::CategoryInput;
use catalog_core::product::ProductInput;
use catalog_core::validation::FieldErrors;
use catalog_db::repositories::{CategoryRepo, ProductRepo};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use sqlx::PgPool;

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Product",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Product with id 42 not found");
}

#[tokio::test]
async fn validation_error_returns_422_with_field_messages() {
    let mut errors = FieldErrors::new();
    errors.add("price", "The price field must be at least 0.");
    errors.add("category_id", "The selected category id is invalid.");

    let (status, json) = error_to_response(AppError::Core(CoreError::Validation(errors))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["errors"]["price"][0], "The price field must be at least 0.");
    assert_eq!(
        json["errors"]["category_id"][0],
        "The selected category id is invalid."
    );
    assert!(json["error"].as_str().unwrap().contains("(and 1 more error"));
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

#[tokio::test]
async fn core_internal_error_is_sanitized() {
    let err = AppError::Core(CoreError::Internal("form missing 'name'".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn other_database_errors_return_500() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Constraint violations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn stale_category_reference_returns_422_on_category_id(pool: PgPool) {
    // Bypasses the form check, as when the category is deleted after validation.
    let input = ProductInput {
        name: "Pen".into(),
        description: "Blue ink".into(),
        price: Decimal::ONE,
        category_id: 999_999,
    };
    let err = ProductRepo::create(&pool, &input)
        .await
        .expect_err("foreign key must reject the insert");

    let (status, json) = error_to_response(AppError::Database(err)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["errors"]["category_id"][0],
        "The selected category id is invalid."
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_slug_returns_409(pool: PgPool) {
    let input = CategoryInput {
        name: "Office".into(),
        slug: "office".into(),
        description: None,
    };
    CategoryRepo::create(&pool, &input).await.unwrap();
    let err = CategoryRepo::create(&pool, &input)
        .await
        .expect_err("unique slug must reject the insert");

    let (status, json) = error_to_response(AppError::Database(err)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}
