//! Configuration for the token service

use chrono::Duration;
use ra_shared::config::AppConfig;

use crate::errors::DomainError;

use super::secret::SecretStore;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Signing key for access tokens
    pub secret: SecretStore,
    /// Access token lifetime
    pub access_token_ttl: Duration,
    /// Refresh token lifetime
    pub refresh_token_ttl: Duration,
    /// bcrypt cost for refresh token hashes
    pub hash_cost: u32,
    /// Upper bound for one best-effort notification
    pub notify_timeout: std::time::Duration,
    /// Send a notification on every refresh, even without an IP change
    pub debug: bool,
}

impl TokenServiceConfig {
    /// Creates a config with the standard lifetimes (1 hour / 24 hours)
    pub fn new(secret: SecretStore) -> Self {
        Self {
            secret,
            access_token_ttl: Duration::hours(1),
            refresh_token_ttl: Duration::hours(24),
            hash_cost: bcrypt::DEFAULT_COST,
            notify_timeout: std::time::Duration::from_secs(5),
            debug: false,
        }
    }

    /// Builds the token service config from the application config
    pub fn from_app_config(config: &AppConfig) -> Result<Self, DomainError> {
        let secret = SecretStore::new(config.jwt.secret.as_bytes())?;

        Ok(Self {
            secret,
            access_token_ttl: Duration::seconds(config.jwt.access_token_ttl),
            refresh_token_ttl: Duration::seconds(config.jwt.refresh_token_ttl),
            hash_cost: config.jwt.hash_cost,
            notify_timeout: std::time::Duration::from_secs(config.notification.timeout),
            debug: config.debug,
        })
    }
}
