use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::extractor::AuthUser;
use crate::envelope::{ApiJson, ApiResponse};
use crate::errors::AppError;
use crate::models::career::CareerOption;
use crate::quiz::catalog::{Question, QUESTIONS};
use crate::quiz::engine::{parse_answers, submit_answers, QuizOutcome};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SubmitRequest {
    pub answers: Option<Value>,
}

#[derive(Serialize)]
pub struct QuestionsResponse {
    pub questions: &'static [Question],
}

#[derive(Serialize)]
pub struct TestStatusResponse {
    pub test_completed: bool,
    pub career_options: Option<Vec<CareerOption>>,
    pub attempts: usize,
    pub last_submitted_at: Option<DateTime<Utc>>,
}

/// GET /api/test/questions
pub async fn handle_get_questions(_user: AuthUser) -> ApiResponse<QuestionsResponse> {
    ApiResponse::data(QuestionsResponse {
        questions: &QUESTIONS,
    })
}

/// POST /api/test/submit
///
/// Allows one submission per user: a completed test is rejected here,
/// before the engine runs.
pub async fn handle_submit(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiJson(req): ApiJson<SubmitRequest>,
) -> Result<ApiResponse<QuizOutcome>, AppError> {
    let answers = parse_answers(req.answers.as_ref())?;

    if user.test_completed {
        return Err(AppError::field("answers", "Career test already completed"));
    }

    let (outcome, _) = submit_answers(state.users.as_ref(), user.id, answers).await?;
    Ok(ApiResponse::with_message("Test completed successfully", outcome))
}

/// GET /api/test/status
pub async fn handle_test_status(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<ApiResponse<TestStatusResponse>, AppError> {
    let results = state.users.test_results(user.id).await?;
    Ok(ApiResponse::data(TestStatusResponse {
        test_completed: user.test_completed,
        career_options: user.to_public().career_options,
        attempts: results.len(),
        last_submitted_at: results.last().map(|r| r.created_at),
    }))
}
