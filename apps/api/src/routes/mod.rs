pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::auth::handlers as auth;
use crate::chat::handlers as chat;
use crate::dashboard::handlers as dashboard;
use crate::quiz::handlers as quiz;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth (public)
        .route("/api/auth/signup", post(auth::handle_signup))
        .route("/api/auth/login", post(auth::handle_login))
        .route("/api/auth/health", get(auth::handle_auth_health))
        // Career test
        .route("/api/test/questions", get(quiz::handle_get_questions))
        .route("/api/test/submit", post(quiz::handle_submit))
        .route("/api/test/status", get(quiz::handle_test_status))
        // Dashboard
        .route("/api/dashboard", get(dashboard::handle_dashboard))
        .route("/api/dashboard/profile", put(dashboard::handle_update_profile))
        .route("/api/dashboard/community", get(dashboard::handle_community))
        .route("/api/dashboard/tasks", get(dashboard::handle_tasks))
        .route(
            "/api/dashboard/tasks/:task_id/complete",
            post(dashboard::handle_complete_task),
        )
        .route(
            "/api/dashboard/achievements",
            get(dashboard::handle_achievements),
        )
        .route("/api/dashboard/resume", get(dashboard::handle_resume))
        // AI chat
        .route("/api/ai-chat/message", post(chat::handle_chat_message))
        .route("/api/ai-chat/suggestions", get(chat::handle_suggestions))
        .route(
            "/api/ai-chat/history",
            get(chat::handle_chat_history).delete(chat::handle_clear_history),
        )
        .route("/api/ai-chat/stats", get(chat::handle_chat_stats))
        .with_state(state)
}
