use ra_core::domain::entities::token::TokenPair;
use serde::{Deserialize, Serialize};

/// Body of `POST /tokens/get`
///
/// `user_id` is kept as a string so that a malformed id is reported as an
/// invalid user rather than a generic body error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTokensRequest {
    pub user_id: String,
}

/// Body of `POST /tokens/refresh`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokensRequest {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }
    }
}
