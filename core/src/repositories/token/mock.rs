//! Mock implementation of TokenRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::DomainError;

use super::r#trait::TokenRepository;

/// Mock token repository for testing
#[derive(Default)]
pub struct MockTokenRepository {
    records: Arc<Mutex<HashMap<Uuid, RefreshTokenRecord>>>,
    fail_saves: AtomicBool,
    fail_cleanup: AtomicBool,
}

impl MockTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent save fail with an internal error
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent bulk delete fail with an internal error
    pub fn set_fail_cleanup(&self, fail: bool) {
        self.fail_cleanup.store(fail, Ordering::SeqCst);
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Snapshot of a stored record
    pub fn get(&self, token_id: Uuid) -> Option<RefreshTokenRecord> {
        self.records.lock().unwrap().get(&token_id).cloned()
    }

    /// Ids of all stored records
    pub fn token_ids(&self) -> Vec<Uuid> {
        self.records.lock().unwrap().keys().copied().collect()
    }

    /// Move a record's expiry into the past
    pub fn force_expire(&self, token_id: Uuid) {
        if let Some(record) = self.records.lock().unwrap().get_mut(&token_id) {
            record.expires_at = Utc::now() - Duration::seconds(1);
        }
    }

    /// Insert a record directly, bypassing the failure switches
    pub fn insert(&self, token_id: Uuid, expires_at: DateTime<Utc>) {
        self.records.lock().unwrap().insert(
            token_id,
            RefreshTokenRecord::new(token_id, "unused-hash".to_string(), expires_at),
        );
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn save_refresh_token(&self, record: RefreshTokenRecord) -> Result<(), DomainError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(DomainError::internal("simulated insert failure"));
        }

        let mut records = self.records.lock().unwrap();

        // Check for duplicate
        if records.contains_key(&record.token_id) {
            return Err(DomainError::internal("duplicate token id"));
        }

        records.insert(record.token_id, record);
        Ok(())
    }

    async fn find_by_token_id(&self, token_id: Uuid) -> Result<Option<RefreshTokenRecord>, DomainError> {
        Ok(self.records.lock().unwrap().get(&token_id).cloned())
    }

    async fn delete_by_token_id(&self, token_id: Uuid) -> Result<bool, DomainError> {
        Ok(self.records.lock().unwrap().remove(&token_id).is_some())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        if self.fail_cleanup.load(Ordering::SeqCst) {
            return Err(DomainError::internal("simulated cleanup failure"));
        }

        let mut records = self.records.lock().unwrap();
        let initial_count = records.len();

        records.retain(|_, record| record.expires_at >= now);

        Ok(initial_count - records.len())
    }
}
