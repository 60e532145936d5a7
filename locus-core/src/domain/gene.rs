//! Gene records from the NCBI gene services

use serde::{Deserialize, Serialize};

/// A gene search hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gene {
    /// NCBI GeneID, e.g. "672"
    pub gene_id: String,
    /// Official symbol, e.g. "BRCA1"
    pub symbol: String,
    /// Full name / description
    pub description: String,
    /// Chromosome the gene sits on (bare name, e.g. "17")
    pub chromosome: String,
    /// Cytogenetic band, e.g. "17q21.31"
    pub map_location: String,
}

/// Full gene record from NCBI esummary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneDetails {
    pub gene_id: String,
    pub symbol: String,
    pub description: String,
    pub chromosome: String,
    pub map_location: String,
    /// RefSeq summary paragraph; empty when NCBI has none
    pub summary: String,
    pub organism: Option<Organism>,
    /// Genomic extent; absent when esummary carries no genomicinfo
    pub bounds: Option<GeneBounds>,
    /// Chromosome accession the bounds refer to, e.g. "NC_000017.11"
    pub accession: Option<String>,
    pub exon_count: Option<u64>,
}

/// Organism a gene record belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organism {
    pub scientific_name: String,
    pub common_name: String,
    pub tax_id: u64,
}

/// Genomic extent of a gene, normalized so `min <= max`.
///
/// Coordinates are 0-based as reported by esummary genomicinfo. Minus-strand
/// genes arrive with chrstart > chrstop and are flipped here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneBounds {
    pub min: u64,
    pub max: u64,
}

impl GeneBounds {
    pub fn new(chrstart: u64, chrstop: u64) -> Self {
        Self {
            min: chrstart.min(chrstop),
            max: chrstart.max(chrstop),
        }
    }

    /// Number of bases covered
    pub fn span(&self) -> u64 {
        self.max - self.min + 1
    }

    /// Half-open [start, end) range covering the gene, for sequence fetches
    pub fn to_range(&self) -> (u64, u64) {
        (self.min, self.max + 1)
    }
}
