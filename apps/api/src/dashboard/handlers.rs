use axum::extract::{Path, State};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::auth::extractor::AuthUser;
use crate::auth::validation::check_name;
use crate::dashboard::aggregator::{build_achievements, build_dashboard, AchievementsView, DashboardView};
use crate::dashboard::mock::{self, CommunityView, ResumeView, TaskCompletion, TasksView};
use crate::envelope::{ApiJson, ApiResponse};
use crate::errors::{AppError, FieldError};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProfileUpdateRequest {
    pub name: Option<String>,
    pub profile_image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileUpdateResponse {
    pub name: Option<String>,
    pub profile_image: Option<String>,
}

fn is_web_url(raw: &str) -> bool {
    Url::parse(raw)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host().is_some())
        .unwrap_or(false)
}

fn validate_profile(req: ProfileUpdateRequest) -> Result<ProfileUpdateResponse, AppError> {
    let mut errors = Vec::new();

    let name = req.name.map(|n| n.trim().to_string());
    if let Some(msg) = name.as_deref().and_then(check_name) {
        errors.push(FieldError::new("name", msg));
    }

    if let Some(image) = req.profile_image.as_deref() {
        if !is_web_url(image) {
            errors.push(FieldError::new(
                "profile_image",
                "Profile image must be a valid URL",
            ));
        }
    }

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    Ok(ProfileUpdateResponse {
        name,
        profile_image: req.profile_image,
    })
}

/// GET /api/dashboard
///
/// Re-reads the user so the view reflects writes made earlier in this session.
pub async fn handle_dashboard(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<ApiResponse<DashboardView>, AppError> {
    let user = state
        .users
        .find_by_id(caller.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(ApiResponse::with_message(
        "Dashboard data retrieved successfully",
        build_dashboard(&user, Utc::now()),
    ))
}

/// PUT /api/dashboard/profile
///
/// Validates and echoes the update. Profiles are not persisted.
pub async fn handle_update_profile(
    _user: AuthUser,
    ApiJson(req): ApiJson<ProfileUpdateRequest>,
) -> Result<ApiResponse<ProfileUpdateResponse>, AppError> {
    let profile = validate_profile(req)?;
    Ok(ApiResponse::with_message("Profile updated successfully", profile))
}

/// GET /api/dashboard/community
pub async fn handle_community(AuthUser(user): AuthUser) -> ApiResponse<CommunityView> {
    ApiResponse::data(mock::community(&user))
}

/// GET /api/dashboard/tasks
pub async fn handle_tasks(_user: AuthUser) -> ApiResponse<TasksView> {
    ApiResponse::data(mock::tasks())
}

/// POST /api/dashboard/tasks/:task_id/complete
pub async fn handle_complete_task(
    AuthUser(user): AuthUser,
    Path(task_id): Path<String>,
) -> ApiResponse<TaskCompletion> {
    ApiResponse::with_message(
        "Task completed successfully",
        mock::complete_task(&user, task_id),
    )
}

/// GET /api/dashboard/achievements
pub async fn handle_achievements(AuthUser(user): AuthUser) -> ApiResponse<AchievementsView> {
    ApiResponse::data(build_achievements(&user, Utc::now()))
}

/// GET /api/dashboard/resume
pub async fn handle_resume(AuthUser(user): AuthUser) -> ApiResponse<ResumeView> {
    ApiResponse::data(mock::resume(&user))
}
