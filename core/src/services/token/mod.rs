//! Token service module for access/refresh pair management
//!
//! This module handles all token-related operations including:
//! - Signed access token generation and verification (HS512)
//! - Opaque refresh token issuance with bcrypt-hashed storage
//! - Rotation on refresh, with new-IP alerts
//! - Background cleanup of expired refresh tokens

mod cleanup;
mod config;
mod secret;
mod service;

#[cfg(test)]
mod tests;

pub use cleanup::{CleanupResult, TokenCleanupConfig, TokenCleanupService};
pub use config::TokenServiceConfig;
pub use secret::SecretStore;
pub use service::TokenService;
