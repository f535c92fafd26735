//! PostgreSQL implementation of the TokenRepository trait.
//!
//! Refresh token records live in `refresh_tokens`, keyed by `token_id`. The
//! bcrypt hash is stored as raw bytes in a `BYTEA` column.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use ra_core::domain::entities::token::RefreshTokenRecord;
use ra_core::errors::DomainError;
use ra_core::repositories::TokenRepository;

/// PostgreSQL implementation of TokenRepository
pub struct PgTokenRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgTokenRepository {
    /// Create a new PostgreSQL token repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a RefreshTokenRecord
    fn row_to_record(row: &sqlx::postgres::PgRow) -> Result<RefreshTokenRecord, DomainError> {
        let token_id: Uuid = row
            .try_get("token_id")
            .map_err(|e| DomainError::internal(format!("Failed to get token_id: {}", e)))?;

        let hash_bytes: Vec<u8> = row
            .try_get("token_hash")
            .map_err(|e| DomainError::internal(format!("Failed to get token_hash: {}", e)))?;

        let token_hash = String::from_utf8(hash_bytes)
            .map_err(|e| DomainError::internal(format!("Stored token hash is not UTF-8: {}", e)))?;

        let expires_at: DateTime<Utc> = row
            .try_get("expires_at")
            .map_err(|e| DomainError::internal(format!("Failed to get expires_at: {}", e)))?;

        Ok(RefreshTokenRecord::new(token_id, token_hash, expires_at))
    }
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    async fn save_refresh_token(&self, record: RefreshTokenRecord) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (token_id, token_hash, expires_at)
            VALUES ($1, $2, $3)
        "#;

        sqlx::query(query)
            .bind(record.token_id)
            .bind(record.token_hash.as_bytes())
            .bind(record.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to save refresh token: {}", e)))?;

        Ok(())
    }

    async fn find_by_token_id(&self, token_id: Uuid) -> Result<Option<RefreshTokenRecord>, DomainError> {
        let query = r#"
            SELECT token_id, token_hash, expires_at
            FROM refresh_tokens
            WHERE token_id = $1
        "#;

        let result = sqlx::query(query)
            .bind(token_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find refresh token: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete_by_token_id(&self, token_id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE token_id = $1")
            .bind(token_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to delete refresh token: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE expires_at < $1")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to purge expired tokens: {}", e)))?;

        Ok(result.rows_affected() as usize)
    }
}
