//! Token error types
//!
//! Every authentication failure collapses into one of two variants so that
//! callers cannot tell an unknown token id apart from a wrong secret.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Bad signature, wrong algorithm, malformed or expired access token
    #[error("invalid access token")]
    InvalidAccessToken,

    /// Unknown token id, hash mismatch, expired or already consumed record
    #[error("invalid refresh token")]
    InvalidRefreshToken,
}
