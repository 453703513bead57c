pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use hint_core::{Deck, StudySession};
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deck: Arc<Deck>,
    pub session: Arc<Mutex<StudySession>>,
}

impl AppState {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck: Arc::new(deck),
            session: Arc::new(Mutex::new(StudySession::new())),
        }
    }
}

/// Build the API router over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/annotate", post(routes::annotate::annotate))
        .route("/api/cards", get(routes::cards::list))
        .route("/api/cards/:id", get(routes::cards::get))
        .route("/api/session", get(routes::session::current))
        .route("/api/session/activate", post(routes::session::activate))
        .route("/api/session/next", post(routes::session::next))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Loading deck from {}...", config.cards_path.display());
    let deck = Deck::load(&config.cards_path)?;
    tracing::info!("Loaded {} cards", deck.len());

    let app = build_router(AppState::new(deck))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
