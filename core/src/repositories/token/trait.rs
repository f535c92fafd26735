//! Token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::DomainError;

/// Repository trait for refresh token records
///
/// Records are keyed by `token_id`. Implementations must give at least
/// read-committed isolation so that a lookup never observes a half-written
/// record.
///
/// # Security Considerations
/// - Only hashes are stored; implementations never see a plaintext token
/// - Deleting a record is terminal, there is no undelete
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Save a new refresh token record
    ///
    /// # Arguments
    /// * `record` - The record to persist
    ///
    /// # Returns
    /// * `Ok(())` - Record stored
    /// * `Err(DomainError)` - Save failed (e.g., duplicate token id, store unavailable)
    async fn save_refresh_token(&self, record: RefreshTokenRecord) -> Result<(), DomainError>;

    /// Find a refresh token record by its token id
    ///
    /// # Returns
    /// * `Ok(Some(RefreshTokenRecord))` - Record found
    /// * `Ok(None)` - No record with given id
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_token_id(&self, token_id: Uuid) -> Result<Option<RefreshTokenRecord>, DomainError>;

    /// Delete a refresh token record by its token id
    ///
    /// This is the claim primitive used when a refresh token is consumed:
    /// when several callers race to delete the same record, exactly one of
    /// them observes `true`.
    ///
    /// # Returns
    /// * `Ok(true)` - This call removed the record
    /// * `Ok(false)` - Record was already gone
    /// * `Err(DomainError)` - Deletion failed
    async fn delete_by_token_id(&self, token_id: Uuid) -> Result<bool, DomainError>;

    /// Delete every record whose `expires_at` is before `now`
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records deleted
    /// * `Err(DomainError)` - Deletion failed
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError>;
}
