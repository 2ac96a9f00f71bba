use std::sync::Arc;

use crate::auth::token::TokenService;
use crate::chat::responder::ChatResponder;
use crate::config::Config;
use crate::repository::UserRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Credential store. PostgreSQL in production, in-memory in tests.
    pub users: Arc<dyn UserRepository>,
    pub tokens: TokenService,
    /// Pluggable chat backend. Default: ScriptedResponder.
    pub chat: Arc<dyn ChatResponder>,
    pub config: Config,
}
