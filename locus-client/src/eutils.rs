//! NCBI E-utilities client (esummary and esearch)

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::{ClientError, Result};
use locus_core::domain::gene::{GeneBounds, GeneDetails, Organism};
use locus_core::domain::genome::clinvar_assembly;
use locus_core::domain::variant::{
    AllelePair, ClinicalSignificance, ClinvarVariant, VariantLocation, parse_last_evaluated,
};

/// Public endpoint of the NCBI E-utilities
pub const EUTILS_API_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// HTTP client for the NCBI E-utilities (gene summaries and ClinVar)
///
/// ClinVar records arrive with free-text classifications and a location
/// list keyed by assembly name; this client normalizes them into the typed
/// domain records. Records that cannot be normalized are skipped with a
/// warning rather than failing the whole listing.
#[derive(Debug, Clone)]
pub struct EutilsClient {
    base_url: String,
    client: Client,
}

// Raw esummary / esearch envelopes. esummary keys each record by its uid
// next to the "uids" array, hence the flattened map.

#[derive(Debug, Deserialize)]
struct EsummaryResponse {
    result: Option<EsummaryResult>,
}

#[derive(Debug, Deserialize)]
struct EsummaryResult {
    #[serde(default)]
    uids: Vec<String>,
    #[serde(flatten)]
    records: HashMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct EsearchResponse {
    #[serde(rename = "esearchresult")]
    esearch_result: Option<EsearchResult>,
}

#[derive(Debug, Deserialize)]
struct EsearchResult {
    #[serde(default)]
    idlist: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawGeneSummary {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    chromosome: String,
    #[serde(default, rename = "maplocation")]
    map_location: String,
    organism: Option<RawOrganism>,
    #[serde(default, rename = "genomicinfo")]
    genomic_info: Vec<RawGenomicInfo>,
}

#[derive(Debug, Deserialize)]
struct RawOrganism {
    #[serde(default, rename = "scientificname")]
    scientific_name: String,
    #[serde(default, rename = "commonname")]
    common_name: String,
    #[serde(default, rename = "taxid")]
    tax_id: u64,
}

#[derive(Debug, Deserialize)]
struct RawGenomicInfo {
    #[serde(default, rename = "chraccver")]
    accession: String,
    #[serde(default, rename = "chrstart")]
    chr_start: u64,
    #[serde(default, rename = "chrstop")]
    chr_stop: u64,
    #[serde(rename = "exoncount")]
    exon_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawClinvarSummary {
    #[serde(default)]
    accession: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    obj_type: String,
    #[serde(default)]
    germline_classification: RawClassification,
    #[serde(default)]
    gene_sort: String,
    #[serde(default)]
    variation_set: Vec<RawVariationSet>,
}

#[derive(Debug, Default, Deserialize)]
struct RawClassification {
    #[serde(default)]
    description: String,
    #[serde(default)]
    last_evaluated: String,
    #[serde(default)]
    review_status: String,
}

#[derive(Debug, Deserialize)]
struct RawVariationSet {
    #[serde(default)]
    variation_loc: Vec<RawVariationLoc>,
}

#[derive(Debug, Deserialize)]
struct RawVariationLoc {
    #[serde(default)]
    assembly_name: String,
    #[serde(default)]
    chr: String,
    // Reported as a string by the live service, as a number in older dumps
    start: Option<Value>,
}

impl EutilsClient {
    /// Create a new client against an E-utilities base URL
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

    // =============================================================================
    // Gene summaries
    // =============================================================================

    /// Fetch the full esummary record for a gene
    ///
    /// # Arguments
    /// * `gene_id` - The NCBI GeneID, e.g. "672"
    ///
    /// # Returns
    /// The gene details, or [`ClientError::NotFound`] when the id is unknown
    pub async fn gene_details(&self, gene_id: &str) -> Result<GeneDetails> {
        let url = format!("{}/esummary.fcgi", self.base_url);
        tracing::debug!("Fetching gene summary for GeneID {}", gene_id);
        let response = self
            .client
            .get(&url)
            .query(&[("db", "gene"), ("id", gene_id), ("retmode", "json")])
            .send()
            .await?;
        let body: EsummaryResponse = crate::handle_response(response).await?;

        let record = body
            .result
            .and_then(|mut result| result.records.remove(gene_id))
            .ok_or_else(|| ClientError::NotFound(format!("gene {}", gene_id)))?;
        // esummary answers 200 with an error record for unknown ids
        if record.get("error").is_some() {
            return Err(ClientError::NotFound(format!("gene {}", gene_id)));
        }

        let raw: RawGeneSummary = serde_json::from_value(record)
            .map_err(|e| ClientError::ParseError(format!("malformed gene summary: {}", e)))?;

        let info = raw.genomic_info.into_iter().next();
        Ok(GeneDetails {
            gene_id: gene_id.to_string(),
            symbol: raw.name,
            description: raw.description,
            chromosome: raw.chromosome,
            map_location: raw.map_location,
            summary: raw.summary,
            organism: raw.organism.map(|o| Organism {
                scientific_name: o.scientific_name,
                common_name: o.common_name,
                tax_id: o.tax_id,
            }),
            bounds: info.as_ref().map(|i| GeneBounds::new(i.chr_start, i.chr_stop)),
            accession: info
                .as_ref()
                .filter(|i| !i.accession.is_empty())
                .map(|i| i.accession.clone()),
            exon_count: info.as_ref().and_then(|i| i.exon_count),
        })
    }

    // =============================================================================
    // ClinVar
    // =============================================================================

    /// List ClinVar variants reported for a gene symbol
    ///
    /// # Arguments
    /// * `symbol` - The gene symbol, e.g. "BRCA1"
    /// * `genome` - The UCSC assembly under view; variant positions are
    ///   taken from the matching ClinVar assembly (hg38 reads GRCh38 ones)
    /// * `limit` - Maximum number of variants to return
    ///
    /// # Returns
    /// Normalized variants in ClinVar's relevance order
    pub async fn clinvar_variants(
        &self,
        symbol: &str,
        genome: &str,
        limit: u32,
    ) -> Result<Vec<ClinvarVariant>> {
        let ids = self.clinvar_search(symbol, limit).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.clinvar_summaries(&ids, clinvar_assembly(genome)).await
    }

    /// Search ClinVar for variant uids linked to a gene symbol
    pub async fn clinvar_search(&self, symbol: &str, limit: u32) -> Result<Vec<String>> {
        let url = format!("{}/esearch.fcgi", self.base_url);
        let term = format!("\"{}\"[gene]", symbol);
        tracing::debug!("Searching ClinVar with term {:?}", term);
        let response = self
            .client
            .get(&url)
            .query(&[("db", "clinvar"), ("term", term.as_str()), ("retmode", "json")])
            .query(&[("retmax", limit)])
            .send()
            .await?;
        let body: EsearchResponse = crate::handle_response(response).await?;

        Ok(body
            .esearch_result
            .map(|result| result.idlist)
            .unwrap_or_default())
    }

    /// Fetch and normalize ClinVar summaries for a batch of uids.
    /// Positions are read from `assembly` ("GRCh38", "GRCh37", ...).
    pub async fn clinvar_summaries(
        &self,
        ids: &[String],
        assembly: &str,
    ) -> Result<Vec<ClinvarVariant>> {
        let url = format!("{}/esummary.fcgi", self.base_url);
        let joined = ids.join(",");
        tracing::debug!("Fetching {} ClinVar summaries", ids.len());
        let response = self
            .client
            .get(&url)
            .query(&[("db", "clinvar"), ("id", joined.as_str()), ("retmode", "json")])
            .send()
            .await?;
        let body: EsummaryResponse = crate::handle_response(response).await?;

        let result = body.result.ok_or_else(|| {
            ClientError::ParseError("clinvar summary response is missing result".to_string())
        })?;
        let EsummaryResult { uids, mut records } = result;

        // Walk the uids array so ClinVar's ordering survives the keyed map
        let mut variants = Vec::with_capacity(uids.len());
        for uid in uids {
            let Some(record) = records.remove(&uid) else {
                continue;
            };
            match normalize_clinvar_record(&uid, record, assembly) {
                Some(variant) => variants.push(variant),
                None => tracing::warn!("Skipping malformed ClinVar record {}", uid),
            }
        }

        Ok(variants)
    }
}

/// Normalize one raw ClinVar esummary record.
///
/// Missing classification fields fall back to "Unknown"; the position is
/// the one reported for `assembly`, when present. Returns `None` when the
/// record does not deserialize at all.
fn normalize_clinvar_record(uid: &str, record: Value, assembly: &str) -> Option<ClinvarVariant> {
    let raw: RawClinvarSummary = serde_json::from_value(record).ok()?;

    let location = raw
        .variation_set
        .first()
        .and_then(|set| {
            set.variation_loc
                .iter()
                .find(|loc| loc.assembly_name == assembly)
        })
        .and_then(|loc| {
            let position = loc.start.as_ref().and_then(value_as_u64)?;
            (!loc.chr.is_empty()).then(|| VariantLocation {
                chromosome: loc.chr.clone(),
                position,
            })
        });
    let alleles = AllelePair::from_title(&raw.title);

    let RawClassification {
        description,
        last_evaluated,
        review_status,
    } = raw.germline_classification;
    let significance_text = if description.trim().is_empty() {
        "Unknown".to_string()
    } else {
        description
    };
    let review_status = if review_status.trim().is_empty() {
        "Unknown".to_string()
    } else {
        review_status
    };
    let variation_type = if raw.obj_type.trim().is_empty() {
        "Unknown".to_string()
    } else {
        raw.obj_type
    };

    Some(ClinvarVariant {
        uid: uid.to_string(),
        accession: raw.accession,
        title: raw.title,
        variation_type,
        significance: ClinicalSignificance::parse(&significance_text),
        significance_text,
        review_status,
        evaluated: parse_last_evaluated(&last_evaluated),
        location,
        alleles,
        gene_sort: raw.gene_sort,
    })
}

/// ClinVar reports positions as strings in live responses and as numbers
/// in some archived ones
fn value_as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use locus_core::domain::sequence::Nucleotide;
    use serde_json::json;

    fn brca1_record() -> Value {
        json!({
            "uid": "55601",
            "accession": "VCV000055601",
            "title": "NM_007294.4(BRCA1):c.5074G>A (p.Asp1692Asn)",
            "obj_type": "single nucleotide variant",
            "germline_classification": {
                "description": "Pathogenic",
                "last_evaluated": "2024/01/05 00:00",
                "review_status": "reviewed by expert panel"
            },
            "gene_sort": "BRCA1",
            "variation_set": [{
                "variation_loc": [
                    {"assembly_name": "GRCh38", "chr": "17", "start": "43067646"},
                    {"assembly_name": "GRCh37", "chr": "17", "start": "41219663"}
                ]
            }]
        })
    }

    #[test]
    fn test_normalize_picks_requested_assembly() {
        let variant = normalize_clinvar_record("55601", brca1_record(), "GRCh38").unwrap();
        assert_eq!(variant.uid, "55601");
        assert_eq!(variant.accession, "VCV000055601");
        assert!(variant.is_snv());
        assert_eq!(
            variant.location,
            Some(VariantLocation {
                chromosome: "17".to_string(),
                position: 43_067_646,
            })
        );
        assert_eq!(variant.significance, ClinicalSignificance::Pathogenic);
        assert_eq!(variant.evaluated, NaiveDate::from_ymd_opt(2024, 1, 5));

        let grch37 = normalize_clinvar_record("55601", brca1_record(), "GRCh37").unwrap();
        assert_eq!(grch37.location.unwrap().position, 41_219_663);
    }

    #[test]
    fn test_normalize_reads_alleles_from_title() {
        let variant = normalize_clinvar_record("55601", brca1_record(), "GRCh38").unwrap();
        let alleles = variant.alleles.unwrap();
        assert_eq!(alleles.reference, Nucleotide::G);
        assert_eq!(alleles.alternative, Nucleotide::A);
    }

    #[test]
    fn test_normalize_numeric_position() {
        let record = json!({
            "title": "NM_007294.4(BRCA1):c.68_69del (p.Glu23fs)",
            "obj_type": "Deletion",
            "variation_set": [{
                "variation_loc": [
                    {"assembly_name": "GRCh38", "chr": "17", "start": 43124027}
                ]
            }]
        });

        let variant = normalize_clinvar_record("17662", record, "GRCh38").unwrap();
        assert_eq!(variant.location.unwrap().position, 43_124_027);
        assert!(variant.alleles.is_none());
        assert!(!variant.is_snv());
    }

    #[test]
    fn test_normalize_defaults_missing_classification() {
        let record = json!({
            "title": "NM_007294.4(BRCA1):c.1A>G",
            "obj_type": "single nucleotide variant"
        });

        let variant = normalize_clinvar_record("1", record, "GRCh38").unwrap();
        assert_eq!(variant.significance_text, "Unknown");
        assert_eq!(variant.review_status, "Unknown");
        assert_eq!(
            variant.significance,
            ClinicalSignificance::Other("Unknown".to_string())
        );
        assert!(variant.location.is_none());
        assert!(variant.evaluated.is_none());
    }

    #[test]
    fn test_normalize_missing_assembly_drops_location() {
        let variant = normalize_clinvar_record("55601", brca1_record(), "NCBI36").unwrap();
        assert!(variant.location.is_none());
    }

    #[test]
    fn test_normalize_rejects_unusable_record() {
        let record = json!({"variation_set": "not a list"});
        assert!(normalize_clinvar_record("9", record, "GRCh38").is_none());
    }

    #[test]
    fn test_value_as_u64_forms() {
        assert_eq!(value_as_u64(&json!(42)), Some(42));
        assert_eq!(value_as_u64(&json!("42")), Some(42));
        assert_eq!(value_as_u64(&json!(" 42 ")), Some(42));
        assert_eq!(value_as_u64(&json!(-1)), None);
        assert_eq!(value_as_u64(&json!("forty-two")), None);
        assert_eq!(value_as_u64(&json!(null)), None);
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = EutilsClient::new("https://eutils.ncbi.nlm.nih.gov/entrez/eutils/");
        assert_eq!(
            client.base_url(),
            "https://eutils.ncbi.nlm.nih.gov/entrez/eutils"
        );
    }
}
