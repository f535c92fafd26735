//! Process-wide signing key for access tokens

use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::errors::DomainError;

/// Holds the symmetric HS512 key
///
/// Loaded once at startup and never mutated; cloning shares the same key
/// material. The key is never printed.
#[derive(Clone)]
pub struct SecretStore {
    /// Key used to sign access tokens
    encoding_key: EncodingKey,
    /// Key used to verify access tokens
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for SecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretStore([REDACTED])")
    }
}

impl SecretStore {
    /// Creates a secret store from raw key bytes
    ///
    /// # Returns
    ///
    /// * `Ok(SecretStore)` - Key loaded
    /// * `Err(DomainError)` - The key is empty
    pub fn new(secret: &[u8]) -> Result<Self, DomainError> {
        if secret.is_empty() {
            return Err(DomainError::internal("signing secret must not be empty"));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        })
    }

    /// Returns the encoding key for signing JWTs
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// Returns the decoding key for verifying JWTs
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}
