//! In-memory repository implementations
//!
//! Process-local stores with the same semantics as the PostgreSQL
//! repositories. Used by the HTTP tests and for running without a database.

mod token_repository;
mod user_directory;


pub use token_repository::InMemoryTokenRepository;
pub use user_directory::InMemoryUserDirectory;
