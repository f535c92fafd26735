//! Configuration module with business-specific sub-modules
//!
//! Configuration is read once at startup from the process environment and
//! handed to component constructors explicitly:
//! - `auth` - signing secret and token lifetimes
//! - `cleanup` - background purge of expired refresh tokens
//! - `database` - PostgreSQL connection settings
//! - `notification` - outbound SMTP settings for sign-in alerts
//! - `server` - HTTP bind address

pub mod auth;
pub mod cleanup;
pub mod database;
pub mod notification;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::JwtConfig;
pub use cleanup::CleanupConfig;
pub use database::DatabaseConfig;
pub use notification::NotificationConfig;
pub use server::ServerConfig;

/// Errors raised while assembling configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required variable: {name}")]
    Missing { name: String },

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: String, value: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Token signing configuration
    pub jwt: JwtConfig,

    /// Outbound notification configuration
    pub notification: NotificationConfig,

    /// Expired token cleanup configuration
    pub cleanup: CleanupConfig,

    /// Debug mode: seeds fixture users and sends a notification on every refresh
    #[serde(default)]
    pub debug: bool,

    /// Honour `X-Forwarded-For` / `X-Real-IP` when resolving the client address
    #[serde(default)]
    pub trust_proxy_headers: bool,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerConfig::from_vars(&lookup)?,
            database: DatabaseConfig::from_vars(&lookup)?,
            jwt: JwtConfig::from_vars(&lookup)?,
            notification: NotificationConfig::from_vars(&lookup)?,
            cleanup: CleanupConfig::default(),
            debug: is_flag_set(&lookup, "DEBUG"),
            trust_proxy_headers: is_flag_set(&lookup, "TRUST_PROXY_HEADERS"),
        })
    }
}

/// A flag is on only when the variable holds exactly `TRUE`
pub(crate) fn is_flag_set<F>(lookup: &F, name: &str) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).as_deref() == Some("TRUE")
}

/// Parse an optional variable, falling back to `default` when unset
pub(crate) fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name: name.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_from_vars_full() {
        let config = AppConfig::from_vars(vars(&[
            ("SECRET_KEY", "s3cret"),
            ("POSTGRES_USER", "auth"),
            ("POSTGRES_PASSWORD", "pw"),
            ("POSTGRES_DB", "tokens"),
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_PORT", "2525"),
            ("SMTP_USER", "alerts@example.com"),
            ("SMTP_PASSWORD", "mailpw"),
            ("DEBUG", "TRUE"),
        ]))
        .unwrap();

        assert_eq!(config.jwt.secret, "s3cret");
        assert_eq!(
            config.database.url,
            "postgres://auth:pw@db/tokens?sslmode=disable"
        );
        assert_eq!(config.notification.smtp_port, 2525);
        assert_eq!(config.server.port, 80);
        assert!(config.debug);
        assert!(!config.trust_proxy_headers);
    }

    #[test]
    fn test_debug_flag_requires_exact_value() {
        let config = AppConfig::from_vars(vars(&[("SECRET_KEY", "k"), ("DEBUG", "true")])).unwrap();
        assert!(!config.debug);
    }

    #[test]
    fn test_missing_secret_is_rejected() {
        let err = AppConfig::from_vars(vars(&[])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Missing {
                name: "SECRET_KEY".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = AppConfig::from_vars(vars(&[("SECRET_KEY", "k"), ("SERVER_PORT", "eighty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name, .. } if name == "SERVER_PORT"));
    }
}
