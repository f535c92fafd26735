//! Domain entities representing core business objects.

pub mod token;

// Re-export commonly used types
pub use token::{AccessTokenClaims, RefreshTokenRecord, TokenPair, REFRESH_TOKEN_BYTES};
