//! Log-only notifier for debug mode

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use ra_core::errors::DomainError;
use ra_core::repositories::UserDirectory;
use ra_core::services::Notifier;

use super::resolve_email;

/// Resolves the recipient like [`super::EmailNotifier`] but logs the message
/// instead of sending it
pub struct LogNotifier<D: UserDirectory> {
    directory: Arc<D>,
    /// Number of messages "sent"
    message_count: AtomicU64,
}

impl<D: UserDirectory> LogNotifier<D> {
    pub fn new(directory: Arc<D>) -> Self {
        Self {
            directory,
            message_count: AtomicU64::new(0),
        }
    }

    /// Get the total number of messages logged
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<D: UserDirectory> Notifier for LogNotifier<D> {
    async fn notify(&self, user_id: Uuid, message: &str) -> Result<(), DomainError> {
        let email = resolve_email(self.directory.as_ref(), user_id).await?;
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            target: "notification",
            provider = "log",
            user_id = %user_id,
            count = count,
            "Sending '{}' to {}",
            message,
            email
        );

        Ok(())
    }
}
