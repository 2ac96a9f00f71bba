use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use uuid::Uuid;

use crate::models::test_result::TestResultRow;
use crate::models::user::UserRow;
use crate::repository::{NewUser, RepositoryError, TestSubmission, UserRepository};

/// Process-local repository for tests. Mirrors the PostgreSQL adapter's
/// uniqueness and atomicity rules.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<Uuid, UserRow>>,
    results: Mutex<Vec<TestResultRow>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<UserRow, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(RepositoryError::DuplicateEmail);
        }
        let now = Utc::now();
        let row = UserRow {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            xp: 0,
            profile_image: None,
            test_completed: false,
            career_options: None,
            created_at: now,
            updated_at: now,
        };
        users.insert(row.id, row.clone());
        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRow>, RepositoryError> {
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRow>, RepositoryError> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn record_test_result(
        &self,
        user_id: Uuid,
        submission: &TestSubmission,
    ) -> Result<UserRow, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&user_id)
            .ok_or(RepositoryError::UserNotFound(user_id))?;

        user.test_completed = true;
        user.career_options = Some(Json(submission.career_options.clone()));
        user.xp += submission.xp_gained;
        user.updated_at = Utc::now();

        self.results.lock().unwrap().push(TestResultRow {
            id: Uuid::new_v4(),
            user_id,
            answers: Json(submission.answers.clone()),
            career_options: Json(submission.career_options.clone()),
            created_at: Utc::now(),
        });

        Ok(user.clone())
    }

    async fn test_results(&self, user_id: Uuid) -> Result<Vec<TestResultRow>, RepositoryError> {
        Ok(self
            .results
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Ada".to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("ada@example.com")).await.unwrap();
        let err = repo.create(new_user("ada@example.com")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::DuplicateEmail));
    }

    #[tokio::test]
    async fn test_record_for_missing_user_writes_nothing() {
        let repo = InMemoryUserRepository::new();
        let missing = Uuid::new_v4();
        let submission = TestSubmission {
            answers: vec!["logical".to_string()],
            career_options: vec![],
            xp_gained: 100,
        };
        let err = repo.record_test_result(missing, &submission).await.unwrap_err();
        assert!(matches!(err, RepositoryError::UserNotFound(id) if id == missing));
        assert!(repo.test_results(missing).await.unwrap().is_empty());
    }
}
