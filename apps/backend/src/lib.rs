pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use srs_core::{get_algorithm, Clock, SpacedRepetitionAlgorithm, SystemClock};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, ConfigError};
use crate::db::{CardStateStore, InMemoryStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CardStateStore>,
    pub algorithm: Arc<dyn SpacedRepetitionAlgorithm>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Build state for the named algorithm.
    pub fn new(
        algorithm: &str,
        store: Arc<dyn CardStateStore>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        let algorithm = get_algorithm(algorithm)
            .ok_or_else(|| ConfigError::UnknownAlgorithm(algorithm.to_string()))?;

        Ok(Self {
            store,
            algorithm: Arc::from(algorithm),
            clock,
        })
    }
}

/// Build the router with all routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Stateless scheduling routes
        .route("/api/review/options", get(routes::review::options))
        .route("/api/review/next-state", post(routes::review::next_state))
        .route("/api/review/preview", post(routes::review::preview))
        // Card routes
        .route(
            "/api/users/:user_id/cards/:card_id",
            get(routes::cards::get).post(routes::cards::register),
        )
        .route(
            "/api/users/:user_id/cards/:card_id/review",
            post(routes::cards::review),
        )
        .route(
            "/api/users/:user_id/cards/:card_id/history",
            get(routes::cards::history),
        )
        // Study routes
        .route("/api/users/:user_id/queue", get(routes::study::queue))
        .route("/api/users/:user_id/stats", get(routes::study::stats))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(algorithm = %config.algorithm, "Initializing scheduler...");
    let state = AppState::new(
        &config.algorithm,
        Arc::new(InMemoryStore::new()),
        Arc::new(SystemClock),
    )?;

    let app = app(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
