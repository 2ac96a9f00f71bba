#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::career::CareerOption;

/// Append-only audit row written on every quiz submission.
#[derive(Debug, Clone, FromRow)]
pub struct TestResultRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub answers: Json<Vec<String>>,
    pub career_options: Json<Vec<CareerOption>>,
    pub created_at: DateTime<Utc>,
}
