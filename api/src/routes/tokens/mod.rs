//! Token route handlers
//!
//! - `POST /tokens/get` issues a pair for a known user
//! - `POST /tokens/refresh` rotates a pair

pub mod get;
pub mod refresh;

pub use get::get_tokens;
pub use refresh::refresh_tokens;
