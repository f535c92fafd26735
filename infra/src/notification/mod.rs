//! Notification Module
//!
//! Delivers user-facing alerts for the token core's [`Notifier`] capability.
//!
//! ## Implementations
//!
//! - **EmailNotifier**: Plain-text mail over an SMTP STARTTLS relay
//! - **LogNotifier**: Debug-mode stand-in that only logs what would be sent
//!
//! Both resolve the recipient through a [`UserDirectory`]. [`create_notifier`]
//! picks one at startup.
//!
//! [`Notifier`]: ra_core::services::Notifier
//! [`UserDirectory`]: ra_core::repositories::UserDirectory

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use ra_core::errors::DomainError;
use ra_core::repositories::UserDirectory;
use ra_core::services::Notifier;
use ra_shared::config::NotificationConfig;

pub mod email;
pub mod log_notifier;

pub use email::EmailNotifier;
pub use log_notifier::LogNotifier;

#[cfg(test)]
mod tests;

/// The notifier chosen at startup
pub enum AlertNotifier<D: UserDirectory> {
    Email(EmailNotifier<D>),
    Log(LogNotifier<D>),
}

impl<D: UserDirectory> AlertNotifier<D> {
    /// Get the provider name
    pub fn provider_name(&self) -> &'static str {
        match self {
            AlertNotifier::Email(_) => "smtp",
            AlertNotifier::Log(_) => "log",
        }
    }
}

#[async_trait]
impl<D: UserDirectory> Notifier for AlertNotifier<D> {
    async fn notify(&self, user_id: Uuid, message: &str) -> Result<(), DomainError> {
        match self {
            AlertNotifier::Email(notifier) => notifier.notify(user_id, message).await,
            AlertNotifier::Log(notifier) => notifier.notify(user_id, message).await,
        }
    }
}

/// Create the notifier for this process
///
/// Debug mode always logs instead of mailing. An SMTP setup that cannot be
/// built falls back to logging too, so token issuance never depends on mail.
pub fn create_notifier<D: UserDirectory>(
    debug: bool,
    config: &NotificationConfig,
    directory: Arc<D>,
) -> AlertNotifier<D> {
    if debug {
        return AlertNotifier::Log(LogNotifier::new(directory));
    }

    match EmailNotifier::new(config, directory.clone()) {
        Ok(notifier) => AlertNotifier::Email(notifier),
        Err(e) => {
            warn!("Failed to configure SMTP notifier: {}", e);
            warn!("Falling back to log-only notifications");
            AlertNotifier::Log(LogNotifier::new(directory))
        }
    }
}

/// Looks up the address a user's alerts go to
async fn resolve_email<D: UserDirectory>(directory: &D, user_id: Uuid) -> Result<String, DomainError> {
    directory
        .find_email(user_id)
        .await?
        .ok_or(DomainError::UserNotFound)
}

/// Masks the local part of an address for logging
///
/// `alice@example.com` becomes `a***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}
