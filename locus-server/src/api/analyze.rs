//! Variant Analysis API Handler
//!
//! Validates analyze requests locally, then forwards them to the remote
//! scoring endpoint verbatim. Invalid requests never reach the model.

use axum::{Json, extract::State};

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use locus_core::dto::analyze::{AnalyzeVariantRequest, AnalyzeVariantResponse};

/// POST /api/analyze-variant
/// Score a single-nucleotide variant
pub async fn analyze_variant(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeVariantRequest>,
) -> ApiResult<Json<AnalyzeVariantResponse>> {
    req.validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    tracing::info!(
        "Analyzing {}:{} alt {} on {}",
        req.chromosome,
        req.variant_position,
        req.alternative,
        req.genome
    );

    let result = state.inference.analyze(&req).await?;

    tracing::info!(
        "Scored {}:{} delta {:.6} ({})",
        req.chromosome,
        result.position,
        result.delta_score,
        result.prediction
    );

    Ok(Json(result))
}
