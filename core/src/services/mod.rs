//! Business services containing domain logic and use cases.

pub mod notification;
pub mod token;

// Re-export commonly used types
pub use notification::Notifier;
pub use token::{
    CleanupResult, SecretStore, TokenCleanupConfig, TokenCleanupService, TokenService,
    TokenServiceConfig,
};
