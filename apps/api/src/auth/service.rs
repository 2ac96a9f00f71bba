use anyhow::Context;
use serde::Serialize;
use tracing::{info, warn};

use crate::auth::password::{burn_password_check, hash_password, verify_password};
use crate::auth::token::TokenService;
use crate::auth::validation::{LoginInput, SignupInput};
use crate::errors::AppError;
use crate::models::user::PublicUser;
use crate::repository::{NewUser, UserRepository};

/// `{user, token}` returned by both signup and login.
#[derive(Debug, Serialize)]
pub struct AuthPayload {
    pub user: PublicUser,
    pub token: String,
}

/// Registers a new account. Input must already be validated.
pub async fn signup(
    users: &dyn UserRepository,
    tokens: &TokenService,
    bcrypt_cost: u32,
    input: SignupInput,
) -> Result<AuthPayload, AppError> {
    if users.find_by_email(&input.email).await?.is_some() {
        return Err(AppError::DuplicateEmail);
    }

    let password_hash = hash_password(input.password, bcrypt_cost).await?;

    // The unique constraint still guards a concurrent signup for the same email.
    let user = users
        .create(NewUser {
            name: input.name,
            email: input.email,
            password_hash,
        })
        .await?;

    info!("Created user {}", user.id);

    let token = tokens.issue(user.id).context("issuing session token")?;
    Ok(AuthPayload {
        user: user.to_public(),
        token,
    })
}

/// Exchanges credentials for a session token.
pub async fn login(
    users: &dyn UserRepository,
    tokens: &TokenService,
    bcrypt_cost: u32,
    input: LoginInput,
) -> Result<AuthPayload, AppError> {
    let Some(user) = users.find_by_email(&input.email).await? else {
        burn_password_check(input.password, bcrypt_cost).await?;
        warn!("Login attempt for unknown email");
        return Err(AppError::InvalidCredentials);
    };

    if !verify_password(input.password, user.password_hash.clone()).await? {
        warn!("Login attempt with wrong password for user {}", user.id);
        return Err(AppError::InvalidCredentials);
    }

    info!("User {} logged in", user.id);

    let token = tokens.issue(user.id).context("issuing session token")?;
    Ok(AuthPayload {
        user: user.to_public(),
        token,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MIN_BCRYPT_COST;
    use crate::auth::validation::{normalize_email, validate_signup, SignupRequest};
    use crate::repository::memory::InMemoryUserRepository;

    fn input(email: &str) -> SignupInput {
        validate_signup(SignupRequest {
            name: Some("Ada Lovelace".into()),
            email: Some(email.into()),
            password: Some("Secret1".into()),
            confirm_password: Some("Secret1".into()),
        })
        .unwrap()
    }

    fn login_input(email: &str, password: &str) -> LoginInput {
        LoginInput {
            email: normalize_email(email).unwrap(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_signup_creates_fresh_user() {
        let repo = InMemoryUserRepository::new();
        let tokens = TokenService::new("test-secret");
        let payload = signup(&repo, &tokens, MIN_BCRYPT_COST, input("ada@example.com"))
            .await
            .unwrap();

        assert_eq!(payload.user.xp_level, 0);
        assert!(!payload.user.test_completed);
        assert!(payload.user.career_options.is_none());
        assert_eq!(tokens.verify(&payload.token).unwrap().user_id, payload.user.id);

        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("password"), "response leaked hash: {json}");
        assert!(!json.contains("$2b$"), "response leaked hash: {json}");
    }

    #[tokio::test]
    async fn test_duplicate_email_ignores_case() {
        let repo = InMemoryUserRepository::new();
        let tokens = TokenService::new("test-secret");
        signup(&repo, &tokens, MIN_BCRYPT_COST, input("ada@example.com"))
            .await
            .unwrap();
        let err = signup(&repo, &tokens, MIN_BCRYPT_COST, input("ADA@Example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateEmail));
    }

    #[tokio::test]
    async fn test_login_errors_are_indistinguishable() {
        let repo = InMemoryUserRepository::new();
        let tokens = TokenService::new("test-secret");
        signup(&repo, &tokens, MIN_BCRYPT_COST, input("ada@example.com"))
            .await
            .unwrap();

        let wrong_password = login(
            &repo,
            &tokens,
            MIN_BCRYPT_COST,
            login_input("ada@example.com", "Wrong1"),
        )
            .await
            .unwrap_err();
        let unknown_email = login(
            &repo,
            &tokens,
            MIN_BCRYPT_COST,
            login_input("bob@example.com", "Secret1"),
        )
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AppError::InvalidCredentials));
        assert!(matches!(unknown_email, AppError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    /// An unknown email must not answer measurably faster than a wrong password.
    #[tokio::test]
    async fn test_unknown_email_pays_bcrypt_cost() {
        const COST: u32 = 8;
        let repo = InMemoryUserRepository::new();
        let tokens = TokenService::new("test-secret");
        signup(&repo, &tokens, COST, input("ada@example.com"))
            .await
            .unwrap();

        let started = std::time::Instant::now();
        let err = login(&repo, &tokens, COST, login_input("ada@example.com", "Wrong1"))
            .await
            .unwrap_err();
        let wrong_password = started.elapsed();
        assert!(matches!(err, AppError::InvalidCredentials));

        let started = std::time::Instant::now();
        let err = login(&repo, &tokens, COST, login_input("bob@example.com", "Wrong1"))
            .await
            .unwrap_err();
        let unknown_email = started.elapsed();
        assert!(matches!(err, AppError::InvalidCredentials));

        assert!(
            unknown_email * 4 >= wrong_password,
            "unknown email took {unknown_email:?}, wrong password took {wrong_password:?}"
        );
    }

    #[tokio::test]
    async fn test_login_with_mixed_case_email() {
        let repo = InMemoryUserRepository::new();
        let tokens = TokenService::new("test-secret");
        let created = signup(&repo, &tokens, MIN_BCRYPT_COST, input("ada@example.com"))
            .await
            .unwrap();
        let payload = login(
            &repo,
            &tokens,
            MIN_BCRYPT_COST,
            login_input("Ada@EXAMPLE.com", "Secret1"),
        )
            .await
            .unwrap();
        assert_eq!(payload.user.id, created.user.id);
    }
}
