//! Shared response envelope types for API handlers.
//!
//! Read endpoints use a `{ "data": ... }` envelope. Mutations additionally
//! carry the success message and the route the client should return to,
//! replacing a session-held flash message.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Envelope returned by create, update and delete handlers.
///
/// ```json
/// { "data": { ... }, "message": "Product created successfully.", "redirect_to": "/products" }
/// ```
#[derive(Debug, Serialize)]
pub struct MutationResponse<T: Serialize> {
    pub data: T,
    pub message: &'static str,
    pub redirect_to: &'static str,
}

/// Payload of a delete response: the id that was removed.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub id: catalog_core::types::DbId,
}
