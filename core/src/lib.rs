//! # RotAuth Core
//!
//! Core business logic and domain layer for the RotAuth backend.
//! This crate contains the token entities, the token issuing / rotation
//! service, the expired-token cleanup service, repository and capability
//! interfaces, and the error types the other layers build on.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::entities::token::{AccessTokenClaims, RefreshTokenRecord, TokenPair};
pub use errors::{DomainError, TokenError};
pub use repositories::{TokenRepository, UserDirectory};
pub use services::{
    CleanupResult, Notifier, SecretStore, TokenCleanupConfig, TokenCleanupService, TokenService,
    TokenServiceConfig,
};
