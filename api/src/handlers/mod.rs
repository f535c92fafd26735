pub mod client_ip;
pub mod error_handler;

pub use client_ip::client_ip;
pub use error_handler::{handle_domain_error, json_error_handler};
