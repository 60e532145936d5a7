//! Locus Analysis Proxy
//!
//! Entry point: loads configuration from the environment, builds the
//! router, and serves until shutdown. The scoring endpoint URL is the one
//! required setting; everything else has defaults.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use locus_client::InferenceClient;
use locus_server::api::{self, AppState};
use locus_server::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "locus_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Locus analysis proxy");

    let config = Config::from_env()?;
    config.validate()?;
    info!(
        "Forwarding analyze requests to {} (timeout {:?})",
        config.inference_url, config.inference_timeout
    );

    let http_client = reqwest::Client::builder()
        .timeout(config.inference_timeout)
        .build()
        .context("Failed to build HTTP client")?;
    let inference = InferenceClient::with_client(config.inference_url.clone(), http_client);

    // Build router with all API endpoints
    let app = api::create_router(AppState::new(inference));

    info!("Listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
