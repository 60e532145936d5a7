//! UCSC Genome Browser REST API client

use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{ClientError, Result};
use locus_core::domain::genome::{Chromosome, GenomeAssembly};
use locus_core::domain::sequence::SequenceWindow;

/// Public endpoint of the UCSC Genome Browser REST API
pub const UCSC_API_URL: &str = "https://api.genome.ucsc.edu";

/// HTTP client for the UCSC Genome Browser REST API
///
/// Serves assembly and chromosome listings plus reference sequence
/// windows. Sequence coordinates are 0-based half-open, as the endpoint
/// expects them.
#[derive(Debug, Clone)]
pub struct UcscClient {
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct GenomeListResponse {
    #[serde(rename = "ucscGenomes")]
    ucsc_genomes: Option<HashMap<String, RawGenome>>,
}

#[derive(Debug, Deserialize)]
struct RawGenome {
    organism: Option<String>,
    description: Option<String>,
    #[serde(rename = "sourceName")]
    source_name: Option<String>,
    #[serde(rename = "orderKey", default)]
    order_key: u64,
    #[serde(default)]
    active: u8,
}

#[derive(Debug, Deserialize)]
struct ChromosomeListResponse {
    chromosomes: Option<HashMap<String, u64>>,
}

#[derive(Debug, Deserialize)]
struct SequenceResponse {
    dna: Option<String>,
    error: Option<String>,
}

impl UcscClient {
    /// Create a new client against a UCSC API base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a client with a custom reqwest client (timeouts, proxies, ...)
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List every assembly UCSC serves, sorted by UCSC's display order.
    ///
    /// A response without the `ucscGenomes` object is an error; individual
    /// entries with missing fields are normalized with fallbacks.
    pub async fn list_genomes(&self) -> Result<Vec<GenomeAssembly>> {
        let url = format!("{}/list/ucscGenomes", self.base_url);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let body: GenomeListResponse = crate::handle_response(response).await?;

        let genomes = body.ucsc_genomes.ok_or_else(|| {
            ClientError::ParseError("genome list response is missing ucscGenomes".to_string())
        })?;

        let mut assemblies: Vec<GenomeAssembly> = genomes
            .into_iter()
            .map(|(id, raw)| GenomeAssembly {
                organism: raw.organism.unwrap_or_else(|| "Other".to_string()),
                description: raw.description.unwrap_or_else(|| id.clone()),
                source_name: raw.source_name.unwrap_or_else(|| id.clone()),
                order_key: raw.order_key,
                active: raw.active != 0,
                id,
            })
            .collect();
        assemblies.sort_by(|a, b| a.order_key.cmp(&b.order_key).then_with(|| a.id.cmp(&b.id)));

        Ok(assemblies)
    }

    /// List chromosomes for an assembly in natural order (chr1..chr22, X,
    /// Y, M, then scaffolds). Callers that only want placed chromosomes
    /// filter with [`Chromosome::is_placed`].
    pub async fn list_chromosomes(&self, genome: &str) -> Result<Vec<Chromosome>> {
        let url = format!("{}/list/chromosomes", self.base_url);
        tracing::debug!("GET {} genome={}", url, genome);
        let response = self
            .client
            .get(&url)
            .query(&[("genome", genome)])
            .send()
            .await?;
        let body: ChromosomeListResponse = crate::handle_response(response).await?;

        let sizes = body.chromosomes.ok_or_else(|| {
            ClientError::ParseError(format!(
                "chromosome list for {} is missing chromosomes",
                genome
            ))
        })?;

        let mut chromosomes: Vec<Chromosome> = sizes
            .into_iter()
            .map(|(name, size)| Chromosome { name, size })
            .collect();
        chromosomes.sort();

        Ok(chromosomes)
    }

    /// Fetch a reference sequence window. Coordinates are 0-based
    /// half-open.
    ///
    /// The endpoint reports failures inside a 200 body (an `error` field or
    /// a missing `dna`); both surface as [`ClientError::UpstreamError`].
    /// A sequence shorter than the requested range (chromosome edge) is
    /// kept, with a warning.
    pub async fn fetch_sequence(
        &self,
        genome: &str,
        chromosome: &str,
        start: u64,
        end: u64,
    ) -> Result<SequenceWindow> {
        if end <= start {
            return Err(ClientError::InvalidRequest(format!(
                "empty sequence range {}-{}",
                start, end
            )));
        }

        let url = format!("{}/getData/sequence", self.base_url);
        tracing::debug!(
            "Fetching {}:{}-{} ({}) from UCSC",
            chromosome,
            start,
            end,
            genome
        );
        let response = self
            .client
            .get(&url)
            .query(&[("genome", genome), ("chrom", chromosome)])
            .query(&[("start", start), ("end", end)])
            .send()
            .await?;
        let body: SequenceResponse = crate::handle_response(response).await?;

        if let Some(error) = body.error {
            return Err(ClientError::UpstreamError(error));
        }
        let dna = body.dna.ok_or_else(|| {
            ClientError::UpstreamError(format!(
                "no sequence returned for {}:{}-{}",
                chromosome, start, end
            ))
        })?;

        let window = SequenceWindow {
            genome: genome.to_string(),
            chromosome: chromosome.to_string(),
            start,
            end,
            dna: dna.to_uppercase(),
        };
        if window.len() as u64 != window.expected_len() {
            tracing::warn!(
                "received sequence length {} differs from expected {} for {}:{}-{}",
                window.len(),
                window.expected_len(),
                chromosome,
                start,
                end
            );
        }

        Ok(window)
    }

    /// Fetch the window the analysis service scores around a 1-based
    /// position: `size / 2` bases each side of the base itself, clamped at
    /// the chromosome origin.
    pub async fn fetch_window(
        &self,
        genome: &str,
        chromosome: &str,
        position: u64,
        size: u64,
    ) -> Result<SequenceWindow> {
        let (start, end) = SequenceWindow::centered(position, size);
        self.fetch_sequence(genome, chromosome, start, end).await
    }
}
