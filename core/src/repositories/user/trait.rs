//! User directory capability.
//!
//! User records are owned by an external directory; the token core only asks
//! whether an identity exists and where to send alerts for it.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::DomainError;

/// Read-only view of the user directory
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Check whether a user with the given id exists
    ///
    /// # Returns
    /// * `Ok(true)` - User exists
    /// * `Ok(false)` - No such user
    /// * `Err(DomainError)` - Directory lookup failed
    async fn exists(&self, user_id: Uuid) -> Result<bool, DomainError>;

    /// Look up the e-mail address used for notifications
    ///
    /// # Returns
    /// * `Ok(Some(email))` - Address found
    /// * `Ok(None)` - No such user
    /// * `Err(DomainError)` - Directory lookup failed
    async fn find_email(&self, user_id: Uuid) -> Result<Option<String>, DomainError>;
}
