//! Shared setup for the HTTP integration tests

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use uuid::Uuid;

use ra_api::AppState;
use ra_core::errors::DomainError;
use ra_core::repositories::UserDirectory;
use ra_core::services::{Notifier, SecretStore, TokenService, TokenServiceConfig};
use ra_infra::{InMemoryTokenRepository, InMemoryUserDirectory};

pub type TestState = AppState<InMemoryTokenRepository, RecordingNotifier, InMemoryUserDirectory>;

/// Records every notification it is asked to send
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(Uuid, String)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(Uuid, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, user_id: Uuid, message: &str) -> Result<(), DomainError> {
        self.sent.lock().unwrap().push((user_id, message.to_string()));
        Ok(())
    }
}

/// Directory whose lookups always fail
pub struct UnavailableDirectory;

#[async_trait]
impl UserDirectory for UnavailableDirectory {
    async fn exists(&self, _user_id: Uuid) -> Result<bool, DomainError> {
        Err(DomainError::internal("directory connection reset by 10.1.2.3"))
    }

    async fn find_email(&self, _user_id: Uuid) -> Result<Option<String>, DomainError> {
        Err(DomainError::internal("directory connection reset by 10.1.2.3"))
    }
}

pub fn token_config() -> TokenServiceConfig {
    let mut config = TokenServiceConfig::new(SecretStore::new(b"integration-test-secret").unwrap());
    config.hash_cost = 4;
    config
}

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub repository: Arc<InMemoryTokenRepository>,
    pub notifier: Arc<RecordingNotifier>,
    pub user_id: Uuid,
}

/// App state with one known user and in-memory stores
pub fn test_context(trust_proxy_headers: bool) -> TestContext {
    let user_id = Uuid::new_v4();
    let repository = Arc::new(InMemoryTokenRepository::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let user_directory = Arc::new(InMemoryUserDirectory::with_users([(
        user_id,
        "user1@example.com".to_string(),
    )]));

    let token_service = Arc::new(TokenService::new(
        repository.clone(),
        notifier.clone(),
        token_config(),
    ));

    let state = web::Data::new(AppState {
        token_service,
        user_directory,
        trust_proxy_headers,
    });

    TestContext {
        state,
        repository,
        notifier,
        user_id,
    }
}

pub fn peer(ip: &str) -> SocketAddr {
    format!("{}:40000", ip).parse().unwrap()
}
