//! PostgreSQL repository implementations

pub mod token_repository_impl;
pub mod user_directory_impl;

pub use token_repository_impl::PgTokenRepository;
pub use user_directory_impl::PgUserDirectory;
