//! SMTP notification delivery

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use ra_core::errors::DomainError;
use ra_core::repositories::UserDirectory;
use ra_core::services::Notifier;
use ra_shared::config::NotificationConfig;

use super::{mask_email, resolve_email};
use crate::InfrastructureError;

const SUBJECT: &str = "Account security notice";

/// Sends alerts as plain-text e-mail through an SMTP relay
///
/// The relay is reached over STARTTLS and authenticated with the configured
/// SMTP login, which is also the sender address.
pub struct EmailNotifier<D: UserDirectory> {
    directory: Arc<D>,
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl<D: UserDirectory> EmailNotifier<D> {
    /// Builds the SMTP transport; no connection is made until the first send
    ///
    /// # Returns
    /// * `Ok(EmailNotifier)` - Transport configured
    /// * `Err(InfrastructureError::Mail)` - Bad relay host or sender address
    pub fn new(config: &NotificationConfig, directory: Arc<D>) -> Result<Self, InfrastructureError> {
        let sender: Mailbox = config
            .smtp_user
            .parse()
            .map_err(|e| InfrastructureError::Mail(format!("Invalid sender address: {}", e)))?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| InfrastructureError::Mail(format!("Invalid SMTP relay: {}", e)))?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_user.clone(),
                config.smtp_password.clone(),
            ))
            .timeout(Some(Duration::from_secs(config.timeout)))
            .build();

        info!(
            host = %config.smtp_host,
            port = config.smtp_port,
            "SMTP notifier configured"
        );

        Ok(Self {
            directory,
            mailer,
            sender,
        })
    }

    fn build_message(&self, recipient: &str, body: &str) -> Result<Message, DomainError> {
        let to: Mailbox = recipient
            .parse()
            .map_err(|e| DomainError::internal(format!("Invalid recipient address: {}", e)))?;

        Message::builder()
            .from(self.sender.clone())
            .to(to)
            .subject(SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| DomainError::internal(format!("Failed to build message: {}", e)))
    }
}

#[async_trait]
impl<D: UserDirectory> Notifier for EmailNotifier<D> {
    async fn notify(&self, user_id: Uuid, message: &str) -> Result<(), DomainError> {
        let email = resolve_email(self.directory.as_ref(), user_id).await?;
        let mail = self.build_message(&email, message)?;

        self.mailer
            .send(mail)
            .await
            .map_err(|e| DomainError::internal(format!("SMTP delivery failed: {}", e)))?;

        info!(
            target: "notification",
            provider = "smtp",
            user_id = %user_id,
            to = %mask_email(&email),
            "Notification sent"
        );

        Ok(())
    }
}
