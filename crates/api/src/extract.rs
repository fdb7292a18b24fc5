//! Request extractors whose rejections use the JSON error envelope.
//!
//! axum's own `Json` and `Path` reject with plain text. These wrappers
//! route the rejection through [`AppError`] so a malformed body or a
//! non-numeric id still answers `{ "error", "code": "BAD_REQUEST" }`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
