mod config;
mod contact;
mod demos;
mod errors;
mod extract;
mod gate;
mod models;
mod portfolio;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::contact::mailer::build_mailer;
use crate::demos::classifier::MessageClassifier;
use crate::demos::latency::SimulatedLatency;
use crate::demos::recommender::QuestionRecommender;
use crate::gate::{AccessGate, SessionStore};
use crate::portfolio::Portfolio;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Static profile data
    let portfolio = Arc::new(Portfolio::load(&config.data_dir)?);

    // Contact delivery (log-only unless RESEND_API_KEY is set)
    let mailer = build_mailer(&config.mail)?;

    // Demo rule engines
    let latency = SimulatedLatency::from_millis(config.demo_latency_ms);
    info!("Demo latency: {:?}", latency.delay());

    let sessions = SessionStore::new(config.session_ttl, config.max_sessions);
    info!(
        "Session TTL: {}h, max sessions: {}",
        config.session_ttl.num_hours(),
        config.max_sessions
    );

    // Build app state
    let state = AppState {
        portfolio,
        gate: AccessGate::new(&config.access_passphrase),
        sessions,
        mailer,
        classifier: Arc::new(MessageClassifier::default_rules()),
        recommender: Arc::new(QuestionRecommender::default_sets()),
        latency,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the site origin once it is configurable

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
