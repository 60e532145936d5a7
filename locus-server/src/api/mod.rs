//! API Module
//!
//! HTTP layer of the analysis proxy. The analyze route validates and
//! forwards scoring requests; health is for monitoring.

pub mod analyze;
pub mod error;
pub mod health;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use locus_client::InferenceClient;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Client for the remote scoring endpoint
    pub inference: InferenceClient,
}

impl AppState {
    pub fn new(inference: InferenceClient) -> Self {
        Self { inference }
    }
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Variant analysis
        .route("/api/analyze-variant", post(analyze::analyze_variant))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // The viewer frontend calls from another origin
        .layer(CorsLayer::permissive())
}
