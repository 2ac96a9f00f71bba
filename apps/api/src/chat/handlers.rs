use axum::extract::State;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::extractor::AuthUser;
use crate::chat::responder::suggestions;
use crate::envelope::{ApiJson, ApiResponse};
use crate::errors::{AppError, FieldError};
use crate::state::AppState;

pub const MAX_MESSAGE_CHARS: usize = 1000;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChatMessageRequest {
    pub message: Option<String>,
    pub conversation_history: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessageResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub conversation_id: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
    pub personalized: bool,
}

#[derive(Debug, Serialize)]
pub struct ChatExchange {
    pub id: u32,
    pub user_message: &'static str,
    pub ai_response: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ChatHistoryResponse {
    pub conversations: Vec<ChatExchange>,
    pub total_messages: usize,
}

#[derive(Debug, Serialize)]
pub struct ChatStatsResponse {
    pub total_conversations: u32,
    pub total_messages: u32,
    pub most_discussed_topics: [&'static str; 4],
    pub last_chat_date: DateTime<Utc>,
}

/// Returns the trimmed message and the history entries, or every violation.
fn validate_message(req: ChatMessageRequest) -> Result<(String, Vec<Value>), AppError> {
    let mut errors = Vec::new();

    let message = req.message.unwrap_or_default().trim().to_string();
    let len = message.chars().count();
    if len == 0 || len > MAX_MESSAGE_CHARS {
        errors.push(FieldError::new(
            "message",
            format!("Message must be between 1 and {MAX_MESSAGE_CHARS} characters"),
        ));
    }

    let history = match req.conversation_history {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(_) => {
            errors.push(FieldError::new(
                "conversation_history",
                "Conversation history must be an array",
            ));
            Vec::new()
        }
    };

    if errors.is_empty() {
        Ok((message, history))
    } else {
        Err(AppError::Validation(errors))
    }
}

/// POST /api/ai-chat/message
pub async fn handle_chat_message(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiJson(req): ApiJson<ChatMessageRequest>,
) -> Result<ApiResponse<ChatMessageResponse>, AppError> {
    let (message, history) = validate_message(req)?;
    let career_options = user.career_options();

    let reply = state.chat.reply(&message, &history, career_options).await?;
    let now = Utc::now();

    Ok(ApiResponse::with_message(
        "AI response generated successfully",
        ChatMessageResponse {
            message: reply,
            timestamp: now,
            conversation_id: format!("conv_{}_{}", user.id, now.timestamp_millis()),
            suggestions: suggestions(career_options),
        },
    ))
}

/// GET /api/ai-chat/suggestions
pub async fn handle_suggestions(AuthUser(user): AuthUser) -> ApiResponse<SuggestionsResponse> {
    let career_options = user.career_options();
    ApiResponse::data(SuggestionsResponse {
        suggestions: suggestions(career_options),
        personalized: !career_options.is_empty(),
    })
}

/// GET /api/ai-chat/history
///
/// Conversations are not stored; this returns a fixed sample.
pub async fn handle_chat_history(_user: AuthUser) -> ApiResponse<ChatHistoryResponse> {
    let conversations = vec![ChatExchange {
        id: 1,
        user_message: "Hello, I need help with my career",
        ai_response: "Hello! I'm here to help with your career development. What specific area would you like to focus on?",
        timestamp: Utc::now() - Duration::days(1),
    }];
    let total_messages = conversations.len() * 2;
    ApiResponse::data(ChatHistoryResponse {
        conversations,
        total_messages,
    })
}

/// DELETE /api/ai-chat/history
pub async fn handle_clear_history(_user: AuthUser) -> ApiResponse<()> {
    ApiResponse::message("Chat history cleared successfully")
}

/// GET /api/ai-chat/stats
pub async fn handle_chat_stats(_user: AuthUser) -> ApiResponse<ChatStatsResponse> {
    ApiResponse::data(ChatStatsResponse {
        total_conversations: 5,
        total_messages: 23,
        most_discussed_topics: [
            "Career Planning",
            "Resume Writing",
            "Interview Preparation",
            "Skill Development",
        ],
        last_chat_date: Utc::now(),
    })
}
