//! Shared configuration and common types for the RotAuth server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the process environment
//! - The JSON error body returned by the HTTP layer

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CleanupConfig, ConfigError, DatabaseConfig, JwtConfig, NotificationConfig,
    ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
