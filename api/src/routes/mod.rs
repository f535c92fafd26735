//! Route handlers

pub mod tokens;
