//! Analyze command handler
//!
//! Sends a variant to the analysis endpoint and renders the prediction.
//! With --gene, the analyzed variant is looked up in ClinVar and the model
//! call is compared against the reported classification.

use anyhow::{Context, Result};
use colored::*;

use crate::config::Config;
use locus_client::{EutilsClient, InferenceClient};
use locus_core::domain::analysis::{Agreement, Pathogenicity};
use locus_core::domain::variant::ClinvarVariant;
use locus_core::dto::analyze::{AnalyzeVariantRequest, AnalyzeVariantResponse};

/// How many ClinVar records to scan when comparing a prediction
const COMPARE_FETCH_LIMIT: u32 = 50;

/// Score a variant and display the prediction
pub async fn analyze_variant(
    config: &Config,
    genome: String,
    chromosome: String,
    position: u64,
    alternative: String,
    gene: Option<String>,
) -> Result<()> {
    let req = AnalyzeVariantRequest {
        variant_position: position,
        alternative,
        genome,
        chromosome,
    };
    req.validate()?;

    let client = InferenceClient::new(&config.analyzer_url);
    println!(
        "{}",
        format!(
            "Scoring {}:{} alt {} on {} (a cold model can take a minute)...",
            req.chromosome, req.variant_position, req.alternative, req.genome
        )
        .dimmed()
    );

    let result = client
        .analyze(&req)
        .await
        .context("Failed to analyze variant")?;

    println!("{}", "✓ Analysis complete".green().bold());
    println!(
        "  Position:    {}",
        format!("{}:{}", req.chromosome, result.position).cyan()
    );
    println!("  Change:      {}>{}", result.reference, result.alternative);
    println!("  Delta score: {:+.6}", result.delta_score);
    println!("  Prediction:  {}", prediction_colored(&result));
    println!(
        "  Confidence:  {:.1}%",
        result.classification_confidence * 100.0
    );

    if let Some(symbol) = gene {
        compare_with_clinvar(config, &req, &result, &symbol).await?;
    }

    Ok(())
}

/// Look up the analyzed variant in ClinVar and report agreement
async fn compare_with_clinvar(
    config: &Config,
    req: &AnalyzeVariantRequest,
    result: &AnalyzeVariantResponse,
    symbol: &str,
) -> Result<()> {
    let client = EutilsClient::new(&config.eutils_url);
    let variants = client
        .clinvar_variants(symbol, &req.genome, COMPARE_FETCH_LIMIT)
        .await
        .context("Failed to load ClinVar variants")?;

    println!();
    let Some(variant) = variants.iter().find(|v| matches_result(v, result)) else {
        println!(
            "{}",
            format!(
                "No ClinVar record for {} matches {}:{} {}>{}.",
                symbol, req.chromosome, result.position, result.reference, result.alternative
            )
            .yellow()
        );
        return Ok(());
    };

    println!("{}", "ClinVar comparison:".bold());
    println!("  Record:       {}", variant.title);
    println!("  Accession:    {}", variant.accession.dimmed());
    println!("  Significance: {}", variant.significance_text);

    let verdict = result
        .pathogenicity()
        .map(|p| Agreement::between(p, &variant.significance));
    match verdict {
        Some(Agreement::Concordant) => println!(
            "  Verdict:      {}",
            "concordant with ClinVar".green().bold()
        ),
        Some(Agreement::Discordant) => println!(
            "  Verdict:      {}",
            "discordant with ClinVar".red().bold()
        ),
        _ => println!(
            "  Verdict:      {}",
            "not comparable (no established classification)".yellow()
        ),
    }

    Ok(())
}

/// Whether a ClinVar record is the variant that was analyzed: same
/// position, and the same alternative allele when the record spells one out
fn matches_result(variant: &ClinvarVariant, result: &AnalyzeVariantResponse) -> bool {
    let Some(location) = &variant.location else {
        return false;
    };
    if location.position != result.position {
        return false;
    }
    match variant.alleles {
        Some(alleles) => alleles.alternative.to_string() == result.alternative,
        None => variant.is_snv(),
    }
}

/// Color a prediction: red when pathogenic, green when benign
fn prediction_colored(result: &AnalyzeVariantResponse) -> ColoredString {
    match result.pathogenicity() {
        Some(Pathogenicity::LikelyPathogenic) => result.prediction.red().bold(),
        Some(Pathogenicity::LikelyBenign) => result.prediction.green().bold(),
        None => result.prediction.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use locus_core::domain::sequence::Nucleotide;
    use locus_core::domain::variant::{AllelePair, ClinicalSignificance, VariantLocation};

    fn response(position: u64, reference: &str, alternative: &str) -> AnalyzeVariantResponse {
        AnalyzeVariantResponse {
            position,
            reference: reference.to_string(),
            alternative: alternative.to_string(),
            delta_score: -0.002,
            prediction: "Likely pathogenic".to_string(),
            classification_confidence: 0.9,
        }
    }

    fn variant(
        position: Option<u64>,
        alleles: Option<(Nucleotide, Nucleotide)>,
    ) -> ClinvarVariant {
        ClinvarVariant {
            uid: "1".to_string(),
            accession: "VCV000000001".to_string(),
            title: "NM_007294.4(BRCA1):c.5074G>A".to_string(),
            variation_type: "single nucleotide variant".to_string(),
            significance: ClinicalSignificance::Pathogenic,
            significance_text: "Pathogenic".to_string(),
            review_status: "criteria provided".to_string(),
            evaluated: None,
            location: position.map(|p| VariantLocation {
                chromosome: "17".to_string(),
                position: p,
            }),
            alleles: alleles.map(|(reference, alternative)| AllelePair {
                reference,
                alternative,
            }),
            gene_sort: "BRCA1".to_string(),
        }
    }

    #[test]
    fn test_match_on_position_and_alternative() {
        let v = variant(Some(43_067_646), Some((Nucleotide::G, Nucleotide::A)));
        assert!(matches_result(&v, &response(43_067_646, "G", "A")));
        assert!(!matches_result(&v, &response(43_067_646, "G", "T")));
        assert!(!matches_result(&v, &response(43_067_647, "G", "A")));
    }

    #[test]
    fn test_snv_without_parsed_alleles_matches_on_position() {
        let v = variant(Some(43_067_646), None);
        assert!(matches_result(&v, &response(43_067_646, "G", "A")));
    }

    #[test]
    fn test_record_without_location_never_matches() {
        let v = variant(None, Some((Nucleotide::G, Nucleotide::A)));
        assert!(!matches_result(&v, &response(43_067_646, "G", "A")));
    }
}
