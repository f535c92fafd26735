//! Database module - PostgreSQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management and schema bootstrap
//! - Repository implementations for refresh tokens and the user directory

pub mod connection;
pub mod postgres;


// Re-export commonly used types
pub use connection::DatabasePool;
pub use postgres::{PgTokenRepository, PgUserDirectory};
