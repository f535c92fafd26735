//! Outbound notification (SMTP) configuration

use serde::{Deserialize, Serialize};

use super::{parse_or, ConfigError};

/// SMTP settings used to alert users about sign-ins
#[derive(Clone, Deserialize, Serialize)]
pub struct NotificationConfig {
    /// SMTP relay host
    pub smtp_host: String,

    /// SMTP relay port
    pub smtp_port: u16,

    /// SMTP login, also used as the sender address
    pub smtp_user: String,

    /// SMTP password
    pub smtp_password: String,

    /// Upper bound for a single notification attempt, in seconds
    pub timeout: u64,
}

impl std::fmt::Debug for NotificationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_user", &self.smtp_user)
            .field("smtp_password", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            smtp_host: String::from("localhost"),
            smtp_port: 587,
            smtp_user: String::new(),
            smtp_password: String::new(),
            timeout: 5,
        }
    }
}

impl NotificationConfig {
    /// Read `SMTP_HOST`, `SMTP_PORT`, `SMTP_USER`, `SMTP_PASSWORD`
    pub fn from_vars<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            smtp_host: lookup("SMTP_HOST").unwrap_or(defaults.smtp_host),
            smtp_port: parse_or(lookup, "SMTP_PORT", defaults.smtp_port)?,
            smtp_user: lookup("SMTP_USER").unwrap_or_default(),
            smtp_password: lookup("SMTP_PASSWORD").unwrap_or_default(),
            timeout: parse_or(lookup, "NOTIFICATION_TIMEOUT", defaults.timeout)?,
        })
    }
}
