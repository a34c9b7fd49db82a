use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use prolet_backend::{config::Config, routes, state::AppState};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    setup_logging();

    let config = Config::from_env().context("Invalid configuration")?;

    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is missing; chat and analysis requests will fail");
    }
    if config.mail.is_none() {
        tracing::warn!("MAIL_USERNAME/MAIL_APP_PASSWORD missing; email sending is disabled");
    }
    tracing::info!(model = %config.gemini_model, "using Gemini model");

    let state = Arc::new(AppState::from_config(&config));

    let app = routes::create_router(&config.site)
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Prolet running at http://localhost:{}", config.port);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
