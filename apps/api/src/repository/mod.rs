//! Credential store: typed CRUD over `users` and `test_results`.
//!
//! Handlers only see `Arc<dyn UserRepository>` from `AppState`, so the
//! PostgreSQL adapter can be replaced by the in-memory one in tests.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::career::CareerOption;
use crate::models::test_result::TestResultRow;
use crate::models::user::UserRow;

pub use postgres::PgUserRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("email already registered")]
    DuplicateEmail,

    #[error("user {0} not found")]
    UserNotFound(Uuid),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Fields required to insert a user. `email` must already be normalised.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// A scored quiz submission to persist.
#[derive(Debug, Clone)]
pub struct TestSubmission {
    pub answers: Vec<String>,
    pub career_options: Vec<CareerOption>,
    pub xp_gained: i32,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a user with zero XP. Fails with `DuplicateEmail` on a taken email.
    async fn create(&self, user: NewUser) -> Result<UserRow, RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRow>, RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRow>, RepositoryError>;

    /// Appends a test result and applies it to the user atomically:
    /// marks the test completed, stores the ranking, adds `xp_gained`.
    async fn record_test_result(
        &self,
        user_id: Uuid,
        submission: &TestSubmission,
    ) -> Result<UserRow, RepositoryError>;

    /// All stored results for a user, oldest first.
    async fn test_results(&self, user_id: Uuid) -> Result<Vec<TestResultRow>, RepositoryError>;
}
