//! Catalog admin API server library.
//!
//! Exposes the core building blocks (config, state, error handling, routes,
//! form validation, view payloads) so integration tests and the binary
//! entrypoint can both access them.

pub mod config;
pub mod error;
pub mod extract;
pub mod forms;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
