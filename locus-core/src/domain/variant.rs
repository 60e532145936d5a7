//! ClinVar variant records

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::domain::sequence::Nucleotide;

/// A ClinVar variant record normalized for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinvarVariant {
    /// ClinVar uid (the esummary record key)
    pub uid: String,
    /// VCV accession, e.g. "VCV000055601"
    pub accession: String,
    /// Full title, e.g. "NM_007294.4(BRCA1):c.5074G>A (p.Asp1692Asn)"
    pub title: String,
    /// Variation type as reported ("single nucleotide variant", "Deletion", ...)
    pub variation_type: String,
    /// Typed significance bucket
    pub significance: ClinicalSignificance,
    /// Raw classification description the bucket was parsed from
    pub significance_text: String,
    /// ClinVar review status ("criteria provided, multiple submitters, ...")
    pub review_status: String,
    /// Date the classification was last evaluated, when parseable
    pub evaluated: Option<NaiveDate>,
    /// Position on the assembly under view, when ClinVar reports one for it
    pub location: Option<VariantLocation>,
    /// Reference/alternative alleles, for titles that spell out an SNV
    pub alleles: Option<AllelePair>,
    /// Gene symbol sort key
    pub gene_sort: String,
}

impl ClinvarVariant {
    pub fn is_snv(&self) -> bool {
        self.variation_type
            .eq_ignore_ascii_case("single nucleotide variant")
    }
}

/// Position of a variant on a specific assembly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantLocation {
    /// Bare chromosome name as ClinVar reports it, e.g. "17"
    pub chromosome: String,
    /// 1-based position
    pub position: u64,
}

impl VariantLocation {
    /// UCSC-style chromosome name ("chr17") for sequence fetches
    pub fn ucsc_chromosome(&self) -> String {
        if self.chromosome.starts_with("chr") {
            self.chromosome.clone()
        } else {
            format!("chr{}", self.chromosome)
        }
    }
}

impl fmt::Display for VariantLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chromosome, self.position)
    }
}

/// Clinical significance bucket parsed from ClinVar's free-text description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClinicalSignificance {
    Pathogenic,
    LikelyPathogenic,
    Uncertain,
    LikelyBenign,
    Benign,
    Conflicting,
    Other(String),
}

impl ClinicalSignificance {
    /// Bucket a ClinVar classification description.
    ///
    /// "Conflicting" and "uncertain" are matched before the
    /// pathogenic/benign substrings so that wordings like "Conflicting
    /// classifications of pathogenicity" never land in the pathogenic
    /// bucket. Unrecognized text falls back to `Other`; parsing never fails.
    pub fn parse(description: &str) -> Self {
        let lower = description.to_lowercase();
        if lower.contains("conflicting") {
            Self::Conflicting
        } else if lower.contains("uncertain") {
            Self::Uncertain
        } else if lower.contains("likely pathogenic") {
            Self::LikelyPathogenic
        } else if lower.contains("pathogenic") {
            Self::Pathogenic
        } else if lower.contains("likely benign") {
            Self::LikelyBenign
        } else if lower.contains("benign") {
            Self::Benign
        } else {
            Self::Other(description.to_string())
        }
    }

    pub fn is_pathogenic(&self) -> bool {
        matches!(self, Self::Pathogenic | Self::LikelyPathogenic)
    }

    pub fn is_benign(&self) -> bool {
        matches!(self, Self::Benign | Self::LikelyBenign)
    }
}

impl fmt::Display for ClinicalSignificance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pathogenic => write!(f, "Pathogenic"),
            Self::LikelyPathogenic => write!(f, "Likely pathogenic"),
            Self::Uncertain => write!(f, "Uncertain significance"),
            Self::LikelyBenign => write!(f, "Likely benign"),
            Self::Benign => write!(f, "Benign"),
            Self::Conflicting => write!(f, "Conflicting classifications"),
            Self::Other(text) => write!(f, "{}", text),
        }
    }
}

/// Reference and alternative alleles of an SNV
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllelePair {
    pub reference: Nucleotide,
    pub alternative: Nucleotide,
}

static SNV_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    // HGVS substitution inside a ClinVar title: c.5074G>A, c.-19A>C,
    // c.4358-2A>G, m.1494C>T and friends. Indels have no '>' and skip this.
    Regex::new(r"[cgmn]\.[0-9*+_-]+([ACGT])>([ACGT])").expect("SNV title pattern is valid")
});

impl AllelePair {
    /// Extract ref/alt from a ClinVar title, when it spells out an SNV.
    /// Deletions, duplications, and other non-SNV titles yield `None`.
    pub fn from_title(title: &str) -> Option<Self> {
        let caps = SNV_TITLE.captures(title)?;
        let reference = Nucleotide::try_from(caps[1].chars().next()?).ok()?;
        let alternative = Nucleotide::try_from(caps[2].chars().next()?).ok()?;
        Some(Self {
            reference,
            alternative,
        })
    }
}

impl fmt::Display for AllelePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}>{}", self.reference, self.alternative)
    }
}

/// Parse ClinVar's last-evaluated stamp ("2024/01/05 00:00", sometimes
/// date-only). Unparseable or empty input yields `None`.
pub fn parse_last_evaluated(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y/%m/%d %H:%M")
        .map(|dt| dt.date())
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y/%m/%d"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_significance_buckets() {
        assert_eq!(
            ClinicalSignificance::parse("Pathogenic"),
            ClinicalSignificance::Pathogenic
        );
        assert_eq!(
            ClinicalSignificance::parse("Likely pathogenic"),
            ClinicalSignificance::LikelyPathogenic
        );
        assert_eq!(
            ClinicalSignificance::parse("Benign/Likely benign"),
            ClinicalSignificance::LikelyBenign
        );
        assert_eq!(
            ClinicalSignificance::parse("Uncertain significance"),
            ClinicalSignificance::Uncertain
        );
    }

    #[test]
    fn test_conflicting_is_not_pathogenic() {
        // The wording contains "pathogenicity"; it must not bucket as Pathogenic
        let sig = ClinicalSignificance::parse("Conflicting classifications of pathogenicity");
        assert_eq!(sig, ClinicalSignificance::Conflicting);
        assert!(!sig.is_pathogenic());
    }

    #[test]
    fn test_unknown_text_falls_back_to_other() {
        let sig = ClinicalSignificance::parse("drug response");
        assert_eq!(
            sig,
            ClinicalSignificance::Other("drug response".to_string())
        );
        assert!(!sig.is_pathogenic());
        assert!(!sig.is_benign());
    }

    #[test]
    fn test_allele_pair_from_snv_title() {
        let pair = AllelePair::from_title("NM_007294.4(BRCA1):c.5074G>A (p.Asp1692Asn)").unwrap();
        assert_eq!(pair.reference, Nucleotide::G);
        assert_eq!(pair.alternative, Nucleotide::A);
        assert_eq!(pair.to_string(), "G>A");
    }

    #[test]
    fn test_allele_pair_from_intronic_and_utr_titles() {
        assert!(AllelePair::from_title("NM_007294.4(BRCA1):c.4358-2A>G").is_some());
        assert!(AllelePair::from_title("NM_000059.4(BRCA2):c.*105A>C").is_some());
        assert!(AllelePair::from_title("NC_012920.1:m.1494C>T").is_some());
    }

    #[test]
    fn test_allele_pair_rejects_non_snv_titles() {
        assert!(AllelePair::from_title("NM_007294.4(BRCA1):c.68_69del (p.Glu23fs)").is_none());
        assert!(AllelePair::from_title("NM_007294.4(BRCA1):c.5266dup (p.Gln1756fs)").is_none());
        assert!(AllelePair::from_title("single nucleotide variant").is_none());
    }

    #[test]
    fn test_last_evaluated_formats() {
        assert_eq!(
            parse_last_evaluated("2024/01/05 00:00"),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
        assert_eq!(
            parse_last_evaluated("2019/12/31"),
            NaiveDate::from_ymd_opt(2019, 12, 31)
        );
        assert_eq!(parse_last_evaluated(""), None);
        assert_eq!(parse_last_evaluated("last week"), None);
    }

    #[test]
    fn test_ucsc_chromosome_name() {
        let loc = VariantLocation {
            chromosome: "17".to_string(),
            position: 43_119_628,
        };
        assert_eq!(loc.ucsc_chromosome(), "chr17");
        assert_eq!(loc.to_string(), "17:43119628");

        let prefixed = VariantLocation {
            chromosome: "chrX".to_string(),
            position: 1,
        };
        assert_eq!(prefixed.ucsc_chromosome(), "chrX");
    }
}
