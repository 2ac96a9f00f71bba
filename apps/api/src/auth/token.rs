//! Stateless session tokens: HS256 JWTs carrying the user id, valid for
//! seven days. There is no refresh and no revocation; expiry is the only
//! way a token stops working.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub const TOKEN_TTL_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token signing failed: {0}")]
    Sign(#[source] jsonwebtoken::errors::Error),

    #[error("token rejected: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.issue_at(user_id, Utc::now())
    }

    pub fn issue_at(&self, user_id: Uuid, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            user_id,
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding).map_err(TokenError::Sign)
    }

    /// Checks signature and expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(TokenError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_then_verify() {
        let tokens = TokenService::new("test-secret");
        let user_id = Uuid::new_v4();
        let claims = tokens.verify(&tokens.issue(user_id).unwrap()).unwrap();
        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_DAYS * 24 * 60 * 60);
    }

    #[test]
    fn test_expired_token_rejected() {
        let tokens = TokenService::new("test-secret");
        let issued = Utc::now() - Duration::days(8);
        let token = tokens.issue_at(Uuid::new_v4(), issued).unwrap();
        assert!(tokens.verify(&token).is_err());
    }

    #[test]
    fn test_six_day_old_token_still_valid() {
        let tokens = TokenService::new("test-secret");
        let issued = Utc::now() - Duration::days(6);
        let token = tokens.issue_at(Uuid::new_v4(), issued).unwrap();
        assert!(tokens.verify(&token).is_ok());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = TokenService::new("secret-a").issue(Uuid::new_v4()).unwrap();
        assert!(TokenService::new("secret-b").verify(&token).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(TokenService::new("s").verify("not.a.jwt").is_err());
    }
}
