//! Unit tests for the log-only notifier

use std::sync::Arc;

use uuid::Uuid;

use ra_core::errors::DomainError;
use ra_core::services::Notifier;

use crate::memory::InMemoryUserDirectory;
use crate::notification::{mask_email, LogNotifier};

#[tokio::test]
async fn test_log_notifier_counts_deliveries() {
    let user_id = Uuid::new_v4();
    let directory = Arc::new(InMemoryUserDirectory::with_users([(
        user_id,
        "user1@example.com".to_string(),
    )]));
    let notifier = LogNotifier::new(directory);

    notifier.notify(user_id, "hello").await.unwrap();
    notifier.notify(user_id, "again").await.unwrap();

    assert_eq!(notifier.get_message_count(), 2);
}

#[tokio::test]
async fn test_log_notifier_unknown_user() {
    let notifier = LogNotifier::new(Arc::new(InMemoryUserDirectory::new()));

    let result = notifier.notify(Uuid::new_v4(), "hello").await;

    assert!(matches!(result, Err(DomainError::UserNotFound)));
    assert_eq!(notifier.get_message_count(), 0);
}

#[test]
fn test_mask_email() {
    assert_eq!(mask_email("alice@example.com"), "a***@example.com");
    assert_eq!(mask_email("not-an-address"), "***");
}
