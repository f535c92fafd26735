//! HTTP layer for the RotAuth token service
//!
//! Exposed as a library so the integration tests can build the same
//! application the binary serves.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod routes;

pub use app::{create_app, AppState};
