//! Token cleanup service for periodic removal of expired refresh tokens
//!
//! Cleanup is garbage collection only. Refresh requests check expiry
//! themselves, so a late or failed purge never lets an expired token through.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use ra_shared::config::CleanupConfig;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

use crate::errors::DomainError;
use crate::repositories::TokenRepository;

/// Configuration for token cleanup service
#[derive(Debug, Clone)]
pub struct TokenCleanupConfig {
    /// How often to run cleanup
    pub interval: Duration,
    /// Whether to enable automatic cleanup
    pub enabled: bool,
}

impl Default for TokenCleanupConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(24 * 60 * 60), // Once a day
            enabled: true,
        }
    }
}

impl From<&CleanupConfig> for TokenCleanupConfig {
    fn from(config: &CleanupConfig) -> Self {
        Self {
            interval: Duration::from_secs(config.interval_seconds),
            enabled: config.enabled,
        }
    }
}

/// Service for purging expired refresh token records
pub struct TokenCleanupService<R: TokenRepository + 'static> {
    repository: Arc<R>,
    config: TokenCleanupConfig,
}

impl<R: TokenRepository> TokenCleanupService<R> {
    /// Create a new token cleanup service
    pub fn new(repository: Arc<R>, config: TokenCleanupConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single cleanup cycle
    ///
    /// Deletes every record whose `expires_at` is before now.
    ///
    /// # Returns
    /// * `Ok(CleanupResult)` - Summary of the cycle
    /// * `Err(DomainError)` - The bulk delete failed
    pub async fn run_cleanup(&self) -> Result<CleanupResult, DomainError> {
        info!("Purging expired refresh tokens");

        let deleted = self.repository.delete_expired(Utc::now()).await?;

        info!("Deleted {} expired refresh tokens", deleted);

        Ok(CleanupResult {
            expired_tokens_deleted: deleted,
        })
    }

    /// Start the cleanup service as a background task
    ///
    /// The first purge happens one full interval after start. The task stops
    /// when `shutdown` flips to `true` or its sender is dropped. Returns
    /// `None` when cleanup is disabled.
    pub fn start_background_task(
        self: Arc<Self>,
        mut shutdown: watch::Receiver<bool>,
    ) -> Option<JoinHandle<()>> {
        if !self.config.enabled {
            warn!("Token cleanup service is disabled");
            return None;
        }

        let period = self.config.interval;

        let handle = tokio::spawn(async move {
            info!(
                "Token cleanup service started - will run every {} seconds",
                period.as_secs()
            );

            let mut interval_timer = tokio::time::interval(period);
            interval_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            interval_timer.tick().await;

            loop {
                tokio::select! {
                    _ = interval_timer.tick() => {
                        if let Err(e) = self.run_cleanup().await {
                            error!("Token cleanup cycle failed, retrying next interval: {}", e);
                        }
                    }
                    changed = shutdown.changed() => {
                        if changed.is_err() || *shutdown.borrow() {
                            break;
                        }
                    }
                }
            }

            info!("Token cleanup service stopped");
        });

        Some(handle)
    }
}

/// Result of a cleanup operation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanupResult {
    /// Number of expired refresh tokens deleted
    pub expired_tokens_deleted: usize,
}
