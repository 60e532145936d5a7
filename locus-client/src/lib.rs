//! Locus HTTP clients
//!
//! Typed fetch-and-normalize wrappers around the services the variant
//! viewer talks to:
//! - UCSC Genome Browser REST API (assemblies, chromosomes, sequence)
//! - NCBI ClinicalTables gene search
//! - NCBI EUtils (gene summaries, ClinVar variants)
//! - the remote variant-effect prediction endpoint (or a locus-server
//!   proxy in front of it)
//!
//! Every client decodes the raw upstream JSON into private mirror structs
//! and hands back normalized `locus-core` types.
//!
//! # Example
//!
//! ```no_run
//! use locus_client::{UCSC_API_URL, UcscClient};
//!
//! # async fn example() -> locus_client::Result<()> {
//! let ucsc = UcscClient::new(UCSC_API_URL);
//!
//! let genomes = ucsc.list_genomes().await?;
//! println!("UCSC serves {} assemblies", genomes.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod eutils;
pub mod genes;
pub mod inference;
pub mod ucsc;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use eutils::{EUTILS_API_URL, EutilsClient};
pub use genes::{GENE_SEARCH_URL, GeneSearchClient};
pub use inference::InferenceClient;
pub use ucsc::{UCSC_API_URL, UcscClient};

use serde::de::DeserializeOwned;

/// Handle an upstream response and deserialize JSON.
///
/// Checks the status code and returns an appropriate error if the request
/// failed, or deserializes the response body if successful.
pub(crate) async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::api_error(status.as_u16(), error_text));
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
}
