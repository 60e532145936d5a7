//! Genome assembly and chromosome types

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A reference genome assembly as listed by the UCSC browser API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenomeAssembly {
    /// UCSC assembly id, e.g. "hg38"
    pub id: String,
    /// Organism common name, e.g. "Human"
    pub organism: String,
    /// Human-readable description, e.g. "Dec. 2013 (GRCh38/hg38)"
    pub description: String,
    /// Sequencing source / provider
    pub source_name: String,
    /// UCSC display ordering key (lower sorts first)
    pub order_key: u64,
    /// Whether UCSC still serves this assembly
    pub active: bool,
}

/// A chromosome (or scaffold) within an assembly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chromosome {
    /// UCSC-style name, e.g. "chr17"
    pub name: String,
    /// Length in bases
    pub size: u64,
}

impl Chromosome {
    /// Whether this is a placed chromosome rather than an alt/random
    /// scaffold. UCSC names scaffolds with an underscore
    /// ("chr11_KI270721v1_random"); placed chromosomes never contain one.
    pub fn is_placed(&self) -> bool {
        !self.name.contains('_')
    }

    pub fn rank(&self) -> ChromosomeRank {
        ChromosomeRank::of(&self.name)
    }
}

impl Ord for Chromosome {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Chromosome {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Natural sort position of a chromosome name: chr1..chr22 numerically,
/// then X, Y, the mitochondrial chromosome, then everything else
/// (scaffolds and alts) lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChromosomeRank {
    Numbered(u64),
    X,
    Y,
    Mitochondrial,
    Other(String),
}

impl ChromosomeRank {
    pub fn of(name: &str) -> Self {
        let body = name.strip_prefix("chr").unwrap_or(name);
        if let Ok(n) = body.parse::<u64>() {
            return Self::Numbered(n);
        }
        match body {
            "X" => Self::X,
            "Y" => Self::Y,
            "M" | "MT" => Self::Mitochondrial,
            _ => Self::Other(name.to_string()),
        }
    }
}

/// ClinVar assembly name for a UCSC genome id.
///
/// ClinVar reports variant locations per assembly under GRC naming; the
/// viewer selects the one matching the assembly under view.
pub fn clinvar_assembly(genome: &str) -> &'static str {
    match genome {
        "hg19" => "GRCh37",
        "hg18" => "NCBI36",
        _ => "GRCh38",
    }
}
