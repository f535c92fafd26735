//! # Infrastructure Layer
//!
//! Concrete implementations of the capabilities the RotAuth core depends on.
//!
//! ## Architecture
//!
//! - **Database**: PostgreSQL pool and repositories using SQLx
//! - **Memory**: In-process stores for tests and local development
//! - **Notification**: SMTP delivery of sign-in alerts, plus a log-only
//!   stand-in for debug mode

// Re-export core types for convenience
pub use ra_core::errors::{DomainError, TokenError};

/// Database module - PostgreSQL implementations using SQLx
pub mod database;

/// In-memory repository implementations
pub mod memory;

/// Outbound user notifications
pub mod notification;

pub use database::{DatabasePool, PgTokenRepository, PgUserDirectory};
pub use memory::{InMemoryTokenRepository, InMemoryUserDirectory};
pub use notification::{create_notifier, AlertNotifier, EmailNotifier, LogNotifier};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail transport or message error
    #[error("Mail error: {0}")]
    Mail(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Internal {
            message: err.to_string(),
        }
    }
}
