use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::debug;

use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::state::AppState;

const MISSING_TOKEN: &str = "No token, authorization denied";
const INVALID_TOKEN: &str = "Token is not valid";

/// The authenticated caller, resolved from `Authorization: Bearer <token>`
/// on every request. Add it to a handler's arguments to require a session.
#[derive(Debug, Clone)]
pub struct AuthUser(pub UserRow);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized(MISSING_TOKEN.to_string()))?;

        let token = header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Unauthorized(MISSING_TOKEN.to_string()))?;

        let claims = state.tokens.verify(token).map_err(|e| {
            debug!("Rejected bearer token: {e}");
            AppError::Unauthorized(INVALID_TOKEN.to_string())
        })?;

        let user = state
            .users
            .find_by_id(claims.user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized(INVALID_TOKEN.to_string()))?;

        Ok(AuthUser(user))
    }
}
