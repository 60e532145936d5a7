//! Variant analysis endpoint client

use reqwest::Client;

use crate::error::Result;
use locus_core::dto::analyze::{AnalyzeVariantRequest, AnalyzeVariantResponse};

/// HTTP client for a variant analysis endpoint
///
/// Unlike the other clients this one takes the full endpoint URL rather
/// than a service base: deployments expose the scorer at arbitrary paths,
/// and the request is posted to the URL exactly as given.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    endpoint: String,
    client: Client,
}

impl InferenceClient {
    /// Create a new client posting to the given endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    /// Create a client with a custom reqwest client. Scoring runs a large
    /// model remotely, so callers usually raise the timeout here.
    pub fn with_client(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Score a single-nucleotide variant
    ///
    /// # Arguments
    /// * `req` - The variant to score (1-based position, alternative base)
    ///
    /// # Returns
    /// The scored variant with its delta score and predicted label
    pub async fn analyze(&self, req: &AnalyzeVariantRequest) -> Result<AnalyzeVariantResponse> {
        tracing::debug!(
            "Scoring {}:{} {} against {}",
            req.chromosome,
            req.variant_position,
            req.alternative,
            self.endpoint
        );
        let response = self.client.post(&self.endpoint).json(req).send().await?;

        crate::handle_response(response).await
    }
}
