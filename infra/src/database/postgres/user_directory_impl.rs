//! PostgreSQL implementation of the UserDirectory trait.
//!
//! The `users` table is owned by the wider platform; this service only reads
//! it, except for the debug-mode fixture seeding.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use ra_core::errors::DomainError;
use ra_core::repositories::UserDirectory;

/// Usernames created by [`PgUserDirectory::seed_fixture_users`]
pub const FIXTURE_USERNAMES: [&str; 3] = ["user1", "user2", "user3"];

/// PostgreSQL implementation of UserDirectory
pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert the three debug fixture users with fresh ids
    ///
    /// Existing fixture rows are matched on `username` and get the new id, so
    /// every debug start prints a usable set of user ids.
    pub async fn seed_fixture_users(&self) -> Result<Vec<Uuid>, DomainError> {
        let ids: Vec<Uuid> = FIXTURE_USERNAMES.iter().map(|_| Uuid::new_v4()).collect();

        let query = r#"
            INSERT INTO users (id, username, email)
            VALUES ($1, $2, $3)
            ON CONFLICT (username) DO UPDATE
            SET id = excluded.id
        "#;

        for (id, username) in ids.iter().zip(FIXTURE_USERNAMES) {
            sqlx::query(query)
                .bind(id)
                .bind(username)
                .bind(format!("{}@example.com", username))
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::internal(format!("Failed to seed user {}: {}", username, e)))?;

            info!(user_id = %id, username = %username, "Seeded fixture user");
        }

        Ok(ids)
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    async fn exists(&self, user_id: Uuid) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to look up user: {}", e)))
    }

    async fn find_email(&self, user_id: Uuid) -> Result<Option<String>, DomainError> {
        sqlx::query_scalar::<_, String>("SELECT email FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to look up user email: {}", e)))
    }
}
