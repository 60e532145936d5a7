//! Analyze-variant request and response shapes

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::analysis::Pathogenicity;
use crate::domain::sequence::Nucleotide;

/// Request accepted by the inference endpoint and the proxy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeVariantRequest {
    /// 1-based genomic position of the variant
    pub variant_position: u64,
    /// Alternative allele, a single A/C/G/T base
    pub alternative: String,
    /// Assembly id, e.g. "hg38"
    pub genome: String,
    /// UCSC-style chromosome name, e.g. "chr17"
    pub chromosome: String,
}

/// Reasons an analyze request is rejected before reaching the model
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidRequest {
    #[error("variant_position must be 1 or greater")]
    PositionOutOfRange,
    #[error("alternative must be a single A/C/G/T base, got {0:?}")]
    BadAlternative(String),
    #[error("genome must not be empty")]
    MissingGenome,
    #[error("chromosome must not be empty")]
    MissingChromosome,
}

impl AnalyzeVariantRequest {
    /// Validate field contents. The wire shape itself is enforced by serde;
    /// this checks the values make sense for an SNV.
    pub fn validate(&self) -> Result<(), InvalidRequest> {
        if self.variant_position == 0 {
            return Err(InvalidRequest::PositionOutOfRange);
        }
        self.alternative_base()?;
        if self.genome.trim().is_empty() {
            return Err(InvalidRequest::MissingGenome);
        }
        if self.chromosome.trim().is_empty() {
            return Err(InvalidRequest::MissingChromosome);
        }
        Ok(())
    }

    /// The alternative allele as a typed base
    pub fn alternative_base(&self) -> Result<Nucleotide, InvalidRequest> {
        self.alternative
            .parse()
            .map_err(|_| InvalidRequest::BadAlternative(self.alternative.clone()))
    }
}

/// Result returned by the inference endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeVariantResponse {
    /// 1-based position that was analyzed
    pub position: u64,
    /// Reference base read from the genome window
    pub reference: String,
    /// Alternative base that was scored
    pub alternative: String,
    /// Variant log-likelihood minus reference log-likelihood; negative
    /// scores lean pathogenic
    pub delta_score: f64,
    /// "Likely pathogenic" or "Likely benign"
    pub prediction: String,
    /// Confidence in the call, 0.0..=1.0
    pub classification_confidence: f64,
}

impl AnalyzeVariantResponse {
    /// Typed prediction, when the label is one the model emits
    pub fn pathogenicity(&self) -> Option<Pathogenicity> {
        Pathogenicity::from_label(&self.prediction)
    }
}
