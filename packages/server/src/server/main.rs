// Main entry point for the listing search API server

use std::sync::Arc;

use anyhow::{Context, Result};
use listings::{
    apply_vision_tags, demo_listings, ListingProvider, RemoteListingProvider, StubVisionClient,
};
use server_core::{
    server::{build_app, AppState},
    Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,listings=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting listing search API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Wire up the optional remote corpus provider
    let provider: Option<Arc<dyn ListingProvider>> = match &config.listings_api_base {
        Some(base_url) => {
            tracing::info!(base_url = %base_url, "Remote listings provider configured");
            Some(Arc::new(RemoteListingProvider::new(
                base_url.clone(),
                config.listings_api_key.clone(),
            )))
        }
        None => {
            tracing::info!("No remote listings provider configured, serving demo corpus");
            None
        }
    };

    let mut corpus = demo_listings();
    if config.vision_tagging {
        // The demo corpus ships with vision tags already populated, so this
        // only does work for listings added without them.
        let vision = StubVisionClient::new();
        let enriched = apply_vision_tags(&mut corpus, &vision, 0.5).await;
        tracing::info!(enriched, "Vision tagging pass complete");
    }

    let state = AppState {
        corpus: Arc::new(corpus),
        provider,
    };
    let app = build_app(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);
    tracing::info!("Search: http://localhost:{}/search", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
