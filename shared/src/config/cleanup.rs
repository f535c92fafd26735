//! Expired token cleanup configuration

use serde::{Deserialize, Serialize};

/// Configuration for the background token cleanup task
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CleanupConfig {
    /// How often to run cleanup (in seconds)
    pub interval_seconds: u64,
    /// Whether to enable automatic cleanup
    pub enabled: bool,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 24 * 60 * 60, // Once a day
            enabled: true,
        }
    }
}
