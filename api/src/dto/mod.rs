pub mod tokens;

pub use ra_shared::errors::{error_codes, ErrorResponse};
pub use tokens::{GetTokensRequest, RefreshTokensRequest, TokenPairResponse};
