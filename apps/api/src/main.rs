mod auth;
mod chat;
mod config;
mod dashboard;
mod db;
mod envelope;
mod errors;
mod models;
mod quiz;
mod repository;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::token::TokenService;
use crate::chat::responder::ScriptedResponder;
use crate::config::Config;
use crate::db::create_pool;
use crate::repository::PgUserRepository;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Level Up API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and the credential store on top of it
    let db = create_pool(&config.database_url).await?;
    let users = Arc::new(PgUserRepository::new(db));

    let tokens = TokenService::new(&config.jwt_secret);
    info!("Password hashing at bcrypt cost {}", config.bcrypt_cost);

    // Scripted chat by default; replace with a model-backed ChatResponder to upgrade
    let chat = Arc::new(ScriptedResponder);

    let state = AppState {
        users,
        tokens,
        chat,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the client origin once it is configurable

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
