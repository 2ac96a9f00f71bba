use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use serde_json::{json, Value};

use crate::auth::service::{self, AuthPayload};
use crate::auth::validation::{validate_login, validate_signup, LoginRequest, SignupRequest};
use crate::envelope::{ApiJson, ApiResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SignupRequest>,
) -> Result<(StatusCode, ApiResponse<AuthPayload>), AppError> {
    let input = validate_signup(req)?;
    let payload = service::signup(
        state.users.as_ref(),
        &state.tokens,
        state.config.bcrypt_cost,
        input,
    )
    .await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::with_message("User created successfully", payload),
    ))
}

/// POST /api/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<ApiResponse<AuthPayload>, AppError> {
    let input = validate_login(req)?;
    let payload = service::login(
        state.users.as_ref(),
        &state.tokens,
        state.config.bcrypt_cost,
        input,
    )
    .await?;
    Ok(ApiResponse::with_message("Login successful", payload))
}

/// GET /api/auth/health
pub async fn handle_auth_health() -> ApiResponse<Value> {
    ApiResponse::with_message(
        "Auth service is running",
        json!({ "timestamp": Utc::now() }),
    )
}
