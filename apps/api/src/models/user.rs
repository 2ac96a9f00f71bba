#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::career::CareerOption;

/// Full `users` row. Deliberately not `Serialize`: it carries the password hash.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub xp: i32,
    pub profile_image: Option<String>,
    pub test_completed: bool,
    pub career_options: Option<Json<Vec<CareerOption>>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRow {
    /// Stored ranking, best first. Empty until the test is completed.
    pub fn career_options(&self) -> &[CareerOption] {
        self.career_options
            .as_ref()
            .map(|Json(options)| options.as_slice())
            .unwrap_or(&[])
    }

    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            xp_level: self.xp,
            test_completed: self.test_completed,
            career_options: self.career_options.as_ref().map(|Json(o)| o.clone()),
        }
    }
}

/// The user as clients see it.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Accumulated XP. Named `xp_level` on the wire.
    pub xp_level: i32,
    pub test_completed: bool,
    pub career_options: Option<Vec<CareerOption>>,
}
