//! Health Check API Handler

use axum::{Json, extract::State};

use crate::api::AppState;

/// GET /health
/// Reports liveness and the scoring endpoint this proxy forwards to
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "inference_endpoint": state.inference.endpoint(),
    }))
}
