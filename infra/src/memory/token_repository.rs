//! In-memory refresh token store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use ra_core::domain::entities::token::RefreshTokenRecord;
use ra_core::errors::DomainError;
use ra_core::repositories::TokenRepository;

/// Refresh token records held in a `RwLock<HashMap>`
///
/// Deletes take the write lock, so concurrent deletes of one id are
/// serialized and only the first reports `true`.
#[derive(Default)]
pub struct InMemoryTokenRepository {
    records: RwLock<HashMap<Uuid, RefreshTokenRecord>>,
}

impl InMemoryTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn save_refresh_token(&self, record: RefreshTokenRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().await;

        if records.contains_key(&record.token_id) {
            return Err(DomainError::internal(format!(
                "refresh token {} already exists",
                record.token_id
            )));
        }

        records.insert(record.token_id, record);
        Ok(())
    }

    async fn find_by_token_id(&self, token_id: Uuid) -> Result<Option<RefreshTokenRecord>, DomainError> {
        Ok(self.records.read().await.get(&token_id).cloned())
    }

    async fn delete_by_token_id(&self, token_id: Uuid) -> Result<bool, DomainError> {
        Ok(self.records.write().await.remove(&token_id).is_some())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();

        records.retain(|_, record| record.expires_at >= now);

        Ok(before - records.len())
    }
}
