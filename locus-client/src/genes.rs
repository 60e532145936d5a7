//! NCBI Clinical Tables gene search client

use reqwest::Client;
use serde_json::Value;

use crate::error::Result;
use locus_core::domain::gene::Gene;

/// Public endpoint of the NCBI Clinical Tables search service
pub const GENE_SEARCH_URL: &str = "https://clinicaltables.nlm.nih.gov";

/// Display fields requested from the search endpoint, in column order
const SEARCH_FIELDS: &str = "chromosome,Symbol,description,map_location";

/// HTTP client for the NCBI Clinical Tables gene autocomplete service
///
/// The endpoint answers with a positional JSON array rather than an
/// object, so responses are decoded leniently: rows that do not match the
/// expected shape are skipped, and a payload that is not recognizable at
/// all yields an empty result instead of an error.
#[derive(Debug, Clone)]
pub struct GeneSearchClient {
    base_url: String,
    client: Client,
}

impl GeneSearchClient {
    /// Create a new client against a Clinical Tables base URL
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

    /// Search genes by symbol prefix or name fragment.
    ///
    /// Returns up to `limit` matches ordered by the service's own
    /// relevance ranking.
    pub async fn search(&self, term: &str, limit: u32) -> Result<Vec<Gene>> {
        let url = format!("{}/api/ncbi_genes/v3/search", self.base_url);
        tracing::debug!("Searching genes matching {:?}", term);
        let response = self
            .client
            .get(&url)
            .query(&[("terms", term), ("df", SEARCH_FIELDS)])
            .query(&[("maxList", limit)])
            .send()
            .await?;
        let payload: Value = crate::handle_response(response).await?;

        Ok(parse_search_payload(&payload))
    }
}

/// Decode the positional search payload into genes.
///
/// The expected shape is `[count, [gene_id, ...], extra, [[chromosome,
/// symbol, description, map_location], ...]]`. Ids are paired with display
/// rows by index; anything that does not line up is dropped.
fn parse_search_payload(payload: &Value) -> Vec<Gene> {
    let Some(parts) = payload.as_array() else {
        return Vec::new();
    };
    let Some(ids) = parts.get(1).and_then(Value::as_array) else {
        return Vec::new();
    };
    let Some(rows) = parts.get(3).and_then(Value::as_array) else {
        return Vec::new();
    };

    ids.iter()
        .zip(rows.iter())
        .filter_map(|(id, row)| {
            let gene_id = id.as_str()?.to_string();
            let fields = row.as_array()?;
            Some(Gene {
                gene_id,
                chromosome: field_at(fields, 0),
                symbol: field_at(fields, 1),
                description: field_at(fields, 2),
                map_location: field_at(fields, 3),
            })
        })
        .collect()
}

fn field_at(fields: &[Value], index: usize) -> String {
    fields
        .get(index)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
