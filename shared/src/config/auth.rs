//! Token signing configuration

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Access token lifetime (1 hour)
pub const ACCESS_TOKEN_TTL_SECONDS: i64 = 60 * 60;

/// Refresh token lifetime (24 hours)
pub const REFRESH_TOKEN_TTL_SECONDS: i64 = 24 * 60 * 60;

/// bcrypt cost used for refresh token hashes
pub const DEFAULT_HASH_COST: u32 = 12;

/// JWT authentication configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric key used to sign access tokens
    pub secret: String,

    /// Access token lifetime in seconds
    pub access_token_ttl: i64,

    /// Refresh token lifetime in seconds
    pub refresh_token_ttl: i64,

    /// bcrypt cost factor for refresh token hashes
    #[serde(default = "default_hash_cost")]
    pub hash_cost: u32,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("access_token_ttl", &self.access_token_ttl)
            .field("refresh_token_ttl", &self.refresh_token_ttl)
            .field("hash_cost", &self.hash_cost)
            .finish()
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with the default lifetimes
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_ttl: ACCESS_TOKEN_TTL_SECONDS,
            refresh_token_ttl: REFRESH_TOKEN_TTL_SECONDS,
            hash_cost: DEFAULT_HASH_COST,
        }
    }

    /// Read `SECRET_KEY`; an unset or empty secret is an error
    pub fn from_vars<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup("SECRET_KEY") {
            Some(secret) if !secret.is_empty() => Ok(Self::new(secret)),
            _ => Err(ConfigError::Missing {
                name: "SECRET_KEY".to_string(),
            }),
        }
    }
}

fn default_hash_cost() -> u32 {
    DEFAULT_HASH_COST
}
