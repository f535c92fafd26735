//! In-memory user directory

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use ra_core::errors::DomainError;
use ra_core::repositories::UserDirectory;

/// User ids mapped to notification e-mail addresses
#[derive(Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<Uuid, String>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory pre-populated with `(id, email)` pairs
    pub fn with_users(users: impl IntoIterator<Item = (Uuid, String)>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().collect()),
        }
    }

    /// Adds or replaces a user
    pub async fn add_user(&self, user_id: Uuid, email: impl Into<String>) {
        self.users.write().await.insert(user_id, email.into());
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn exists(&self, user_id: Uuid) -> Result<bool, DomainError> {
        Ok(self.users.read().await.contains_key(&user_id))
    }

    async fn find_email(&self, user_id: Uuid) -> Result<Option<String>, DomainError> {
        Ok(self.users.read().await.get(&user_id).cloned())
    }
}
