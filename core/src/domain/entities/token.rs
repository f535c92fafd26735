//! Token entities for JWT-based authentication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of random bytes behind every refresh token
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Claims carried by a signed access token
///
/// The access token is never persisted. `token_id` is generated per issuance
/// and is the join key to the matching [`RefreshTokenRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Identifier shared with the paired refresh token record
    pub token_id: Uuid,

    /// User the pair was issued to
    pub user_id: Uuid,

    /// Client address observed when the pair was generated
    pub ip: String,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,
}

impl AccessTokenClaims {
    /// Creates claims for a freshly issued access token
    ///
    /// # Arguments
    ///
    /// * `token_id` - Identifier of the pair being issued
    /// * `user_id` - The user's UUID
    /// * `ip` - Client address at issuance time
    /// * `expires_at` - Instant after which the token is rejected
    pub fn new(token_id: Uuid, user_id: Uuid, ip: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token_id,
            user_id,
            ip: ip.into(),
            exp: expires_at.timestamp(),
        }
    }
}

/// Refresh token record stored in the database
///
/// Only a one-way hash of the refresh token is kept; the plaintext leaves
/// the service exactly once, inside the [`TokenPair`] returned at issuance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTokenRecord {
    /// Primary key, equal to the paired access token's `token_id`
    pub token_id: Uuid,

    /// bcrypt hash of the encoded refresh token
    pub token_hash: String,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,
}

impl RefreshTokenRecord {
    pub fn new(token_id: Uuid, token_hash: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            token_id,
            token_hash,
            expires_at,
        }
    }

    /// Checks whether the record has expired as of `now`
    ///
    /// A record is still usable at exactly `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed access token
    pub access_token: String,

    /// Opaque refresh token (standard base64)
    pub refresh_token: String,
}
