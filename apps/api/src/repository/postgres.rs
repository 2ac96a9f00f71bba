use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::models::test_result::TestResultRow;
use crate::models::user::UserRow;
use crate::repository::{NewUser, RepositoryError, TestSubmission, UserRepository};

const UNIQUE_VIOLATION: &str = "23505";

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_insert_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            RepositoryError::DuplicateEmail
        }
        _ => RepositoryError::Database(err),
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: NewUser) -> Result<UserRow, RepositoryError> {
        sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRow>, RepositoryError> {
        Ok(
            sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRow>, RepositoryError> {
        Ok(
            sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn record_test_result(
        &self,
        user_id: Uuid,
        submission: &TestSubmission,
    ) -> Result<UserRow, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        // Update first so a missing user aborts before the audit row exists.
        let user = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET test_completed = TRUE,
                career_options = $1,
                xp = xp + $2,
                updated_at = NOW()
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(Json(submission.career_options.clone()))
        .bind(submission.xp_gained)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(RepositoryError::UserNotFound(user_id))?;

        sqlx::query(
            "INSERT INTO test_results (id, user_id, answers, career_options) VALUES ($1, $2, $3, $4)",
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(Json(submission.answers.clone()))
        .bind(Json(submission.career_options.clone()))
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        debug!("Recorded test result for user {user_id}");

        Ok(user)
    }

    async fn test_results(&self, user_id: Uuid) -> Result<Vec<TestResultRow>, RepositoryError> {
        Ok(sqlx::query_as::<_, TestResultRow>(
            "SELECT * FROM test_results WHERE user_id = $1 ORDER BY created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }
}
