//! Outbound user notification capability
//!
//! The token core only needs "tell this user something"; delivery (SMTP,
//! push, logging in development) lives in the infrastructure layer.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::DomainError;

/// Sends a message to the user behind a user id
///
/// Callers treat delivery as best-effort: an error is logged, never
/// propagated into an authentication decision.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `message` to the user identified by `user_id`
    async fn notify(&self, user_id: Uuid, message: &str) -> Result<(), DomainError>;
}

/// Alert sent when a refresh comes from a different address than issuance
pub fn new_ip_alert(ip: &str) -> String {
    format!("WARNING: sign-in from a new IP address: {}", ip)
}

/// Debug-mode message sent on every refresh to exercise the delivery path
pub fn delivery_check(ip: &str) -> String {
    format!("Mail service check, IP address: {}", ip)
}
