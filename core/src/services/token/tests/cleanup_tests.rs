//! Unit tests for the expired token cleanup service

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{Duration, Utc};
use tokio::sync::watch;
use uuid::Uuid;

use crate::repositories::MockTokenRepository;
use crate::services::token::{CleanupResult, TokenCleanupConfig, TokenCleanupService};

fn seeded_repository(expired: usize, live: usize) -> Arc<MockTokenRepository> {
    let repository = Arc::new(MockTokenRepository::new());
    for _ in 0..expired {
        repository.insert(Uuid::new_v4(), Utc::now() - Duration::hours(1));
    }
    for _ in 0..live {
        repository.insert(Uuid::new_v4(), Utc::now() + Duration::hours(1));
    }
    repository
}

#[tokio::test]
async fn test_run_cleanup_removes_only_expired() {
    let repository = seeded_repository(3, 2);
    let service = TokenCleanupService::new(repository.clone(), TokenCleanupConfig::default());

    let result = service.run_cleanup().await.unwrap();

    assert_eq!(result, CleanupResult { expired_tokens_deleted: 3 });
    assert_eq!(repository.len(), 2);
}

#[tokio::test]
async fn test_run_cleanup_with_nothing_to_do() {
    let repository = seeded_repository(0, 2);
    let service = TokenCleanupService::new(repository.clone(), TokenCleanupConfig::default());

    let result = service.run_cleanup().await.unwrap();

    assert_eq!(result.expired_tokens_deleted, 0);
    assert_eq!(repository.len(), 2);
}

#[tokio::test]
async fn test_run_cleanup_reports_store_failure() {
    let repository = seeded_repository(1, 0);
    repository.set_fail_cleanup(true);
    let service = TokenCleanupService::new(repository.clone(), TokenCleanupConfig::default());

    assert!(service.run_cleanup().await.is_err());
    assert_eq!(repository.len(), 1);
}

#[tokio::test]
async fn test_disabled_cleanup_does_not_start() {
    let config = TokenCleanupConfig {
        interval: StdDuration::from_secs(60),
        enabled: false,
    };
    let service = Arc::new(TokenCleanupService::new(
        Arc::new(MockTokenRepository::new()),
        config,
    ));
    let (_tx, rx) = watch::channel(false);

    assert!(service.start_background_task(rx).is_none());
}

#[tokio::test(start_paused = true)]
async fn test_background_task_purges_and_stops() {
    let repository = seeded_repository(2, 1);
    let config = TokenCleanupConfig {
        interval: StdDuration::from_secs(60),
        enabled: true,
    };
    let service = Arc::new(TokenCleanupService::new(repository.clone(), config));
    let (tx, rx) = watch::channel(false);

    let handle = service.start_background_task(rx).expect("cleanup enabled");

    // Nothing happens before the first full interval
    tokio::time::sleep(StdDuration::from_secs(30)).await;
    assert_eq!(repository.len(), 3);

    tokio::time::sleep(StdDuration::from_secs(31)).await;
    assert_eq!(repository.len(), 1);

    tx.send(true).unwrap();
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_background_task_survives_failed_cycle() {
    let repository = seeded_repository(1, 0);
    repository.set_fail_cleanup(true);
    let config = TokenCleanupConfig {
        interval: StdDuration::from_secs(10),
        enabled: true,
    };
    let service = Arc::new(TokenCleanupService::new(repository.clone(), config));
    let (tx, rx) = watch::channel(false);

    let handle = service.start_background_task(rx).expect("cleanup enabled");

    tokio::time::sleep(StdDuration::from_secs(11)).await;
    assert_eq!(repository.len(), 1);

    repository.set_fail_cleanup(false);
    tokio::time::sleep(StdDuration::from_secs(10)).await;
    assert_eq!(repository.len(), 0);

    drop(tx);
    handle.await.unwrap();
}
