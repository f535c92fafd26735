//! Main token service implementation

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};
use rand::{rngs::OsRng, RngCore};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::entities::token::{
    AccessTokenClaims, RefreshTokenRecord, TokenPair, REFRESH_TOKEN_BYTES,
};
use crate::errors::{DomainError, TokenError};
use crate::repositories::TokenRepository;
use crate::services::notification::{self, Notifier};

use super::config::TokenServiceConfig;

/// A freshly issued pair together with the id of its stored record
#[derive(Debug)]
struct IssuedPair {
    token_id: Uuid,
    pair: TokenPair,
}

/// Service for issuing and rotating access/refresh token pairs
pub struct TokenService<R: TokenRepository, N: Notifier> {
    repository: Arc<R>,
    notifier: Arc<N>,
    config: TokenServiceConfig,
    validation: Validation,
}

impl<R: TokenRepository, N: Notifier> TokenService<R, N> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `repository` - Refresh token persistence
    /// * `notifier` - Channel for new-IP alerts
    /// * `config` - Token service configuration
    pub fn new(repository: Arc<R>, notifier: Arc<N>, config: TokenServiceConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS512);
        validation.leeway = 0;
        validation.validate_exp = true;

        Self {
            repository,
            notifier,
            config,
            validation,
        }
    }

    /// Issues a new token pair for an already validated user
    ///
    /// # Arguments
    ///
    /// * `client_ip` - Address the request came from; embedded in the access token
    /// * `user_id` - The user's UUID
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The access token and the refresh token plaintext
    /// * `Err(DomainError::Internal)` - Randomness, hashing, signing or storage failed;
    ///   nothing is returned and no record is left behind
    pub async fn issue_pair(&self, client_ip: &str, user_id: Uuid) -> Result<TokenPair, DomainError> {
        self.issue(client_ip, user_id).await.map(|issued| issued.pair)
    }

    async fn issue(&self, client_ip: &str, user_id: Uuid) -> Result<IssuedPair, DomainError> {
        let refresh_token = generate_refresh_secret()?;

        let now = Utc::now();
        let claims = AccessTokenClaims::new(
            Uuid::new_v4(),
            user_id,
            client_ip,
            now + self.config.access_token_ttl,
        );
        let access_token = self.encode_jwt(&claims)?;

        let token_hash = self.hash_refresh_token(&refresh_token).await?;
        let record = RefreshTokenRecord::new(
            claims.token_id,
            token_hash,
            now + self.config.refresh_token_ttl,
        );

        self.repository.save_refresh_token(record).await?;

        info!(
            token_id = %claims.token_id,
            user_id = %user_id,
            ip = %client_ip,
            "Issued token pair"
        );

        Ok(IssuedPair {
            token_id: claims.token_id,
            pair: TokenPair {
                access_token,
                refresh_token,
            },
        })
    }

    /// Exchanges a presented pair for a new one
    ///
    /// The presented refresh token is consumed: exactly one caller can
    /// redeem it, even under concurrent attempts. The replacement is issued
    /// before the old record is removed, so a failure part-way through
    /// leaves the presented refresh token usable for a retry.
    ///
    /// # Arguments
    ///
    /// * `access_token` - The access token issued with the refresh token
    /// * `refresh_token` - The refresh token plaintext
    /// * `client_ip` - Address the request came from
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The replacement pair
    /// * `Err(TokenError::InvalidAccessToken)` - Bad signature, algorithm or expired access token
    /// * `Err(TokenError::InvalidRefreshToken)` - Unknown, mismatched, expired or already used refresh token
    /// * `Err(DomainError::Internal)` - Storage or hashing failed
    pub async fn refresh(
        &self,
        access_token: &str,
        refresh_token: &str,
        client_ip: &str,
    ) -> Result<TokenPair, DomainError> {
        let claims = self.verify_access_token(access_token)?;

        let record = self
            .repository
            .find_by_token_id(claims.token_id)
            .await?
            .ok_or(TokenError::InvalidRefreshToken)?;

        if !self.verify_refresh_token(refresh_token, &record.token_hash).await? {
            debug!(token_id = %record.token_id, "Refresh token hash mismatch");
            return Err(TokenError::InvalidRefreshToken.into());
        }

        if record.is_expired_at(Utc::now()) {
            debug!(token_id = %record.token_id, "Refresh token expired");
            return Err(TokenError::InvalidRefreshToken.into());
        }

        let replacement = self.issue(client_ip, claims.user_id).await?;

        match self.repository.delete_by_token_id(record.token_id).await {
            Ok(true) => {}
            Ok(false) => {
                // Another request consumed this token between lookup and delete
                warn!(
                    token_id = %record.token_id,
                    user_id = %claims.user_id,
                    "Refresh token already consumed by a concurrent request"
                );
                self.discard(replacement.token_id).await;
                return Err(TokenError::InvalidRefreshToken.into());
            }
            Err(e) => {
                self.discard(replacement.token_id).await;
                return Err(e);
            }
        }

        if claims.ip != client_ip {
            info!(
                user_id = %claims.user_id,
                previous_ip = %claims.ip,
                ip = %client_ip,
                "Refresh from a new IP address"
            );
            self.notify_best_effort(claims.user_id, &notification::new_ip_alert(client_ip))
                .await;
        } else if self.config.debug {
            self.notify_best_effort(claims.user_id, &notification::delivery_check(client_ip))
                .await;
        }

        info!(
            consumed = %record.token_id,
            issued = %replacement.token_id,
            user_id = %claims.user_id,
            "Rotated token pair"
        );

        Ok(replacement.pair)
    }

    /// Verifies an access token and returns the claims
    ///
    /// Checks the HS512 signature against the process secret and rejects
    /// tokens whose `exp` has passed, with no leeway.
    ///
    /// # Returns
    ///
    /// * `Ok(AccessTokenClaims)` - The decoded claims if valid
    /// * `Err(TokenError::InvalidAccessToken)` - Token is invalid, expired, or malformed
    pub fn verify_access_token(&self, token: &str) -> Result<AccessTokenClaims, DomainError> {
        decode::<AccessTokenClaims>(token, self.config.secret.decoding_key(), &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("Access token rejected: {}", e);
                DomainError::Token(TokenError::InvalidAccessToken)
            })
    }

    /// Encodes claims into a JWT
    fn encode_jwt(&self, claims: &AccessTokenClaims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS512);
        encode(&header, claims, self.config.secret.encoding_key())
            .map_err(|e| DomainError::internal(format!("Failed to sign access token: {}", e)))
    }

    /// Hashes a refresh token on the blocking pool
    async fn hash_refresh_token(&self, token: &str) -> Result<String, DomainError> {
        let token = token.to_owned();
        let cost = self.config.hash_cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(token, cost))
            .await
            .map_err(|e| DomainError::internal(format!("Hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("Failed to hash refresh token: {}", e)))
    }

    /// Compares a presented refresh token with a stored hash on the blocking pool
    ///
    /// A stored hash that cannot be parsed counts as a mismatch.
    async fn verify_refresh_token(&self, token: &str, token_hash: &str) -> Result<bool, DomainError> {
        let token = token.to_owned();
        let token_hash = token_hash.to_owned();

        let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(token, &token_hash))
            .await
            .map_err(|e| DomainError::internal(format!("Hash verification task failed: {}", e)))?;

        match outcome {
            Ok(matches) => Ok(matches),
            Err(e) => {
                warn!("Stored refresh token hash is unreadable: {}", e);
                Ok(false)
            }
        }
    }

    /// Removes a replacement record that will never reach the client
    async fn discard(&self, token_id: Uuid) {
        if let Err(e) = self.repository.delete_by_token_id(token_id).await {
            warn!(token_id = %token_id, "Failed to discard unused refresh token: {}", e);
        }
    }

    /// Sends a notification without letting it affect the caller
    async fn notify_best_effort(&self, user_id: Uuid, message: &str) {
        let delivery = self.notifier.notify(user_id, message);

        match tokio::time::timeout(self.config.notify_timeout, delivery).await {
            Ok(Ok(())) => debug!(user_id = %user_id, "Notification sent"),
            Ok(Err(e)) => warn!(user_id = %user_id, "Failed to notify user: {}", e),
            Err(_) => warn!(user_id = %user_id, "Notification timed out"),
        }
    }
}

/// Draws a fresh refresh token from the OS random source
fn generate_refresh_secret() -> Result<String, DomainError> {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| DomainError::internal(format!("Random source failure: {}", e)))?;

    Ok(STANDARD.encode(bytes))
}
