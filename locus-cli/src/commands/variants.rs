//! Variants command handler
//!
//! Lists ClinVar records for a gene with colored significance.

use anyhow::{Context, Result};
use colored::*;

use crate::config::Config;
use locus_client::EutilsClient;
use locus_core::domain::variant::{ClinicalSignificance, ClinvarVariant};

/// Fetch and display ClinVar variants for a gene
pub async fn list_variants(
    config: &Config,
    symbol: &str,
    genome: &str,
    limit: u32,
    snv_only: bool,
) -> Result<()> {
    let client = EutilsClient::new(&config.eutils_url);
    let mut variants = client
        .clinvar_variants(symbol, genome, limit)
        .await
        .context("Failed to load ClinVar variants")?;

    if snv_only {
        variants.retain(|v| v.is_snv());
    }

    if variants.is_empty() {
        println!("{}", format!("No variants found for {}.", symbol).yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Found {} variant(s) for {}:", variants.len(), symbol).bold()
    );
    println!();
    for variant in &variants {
        print_variant_summary(variant);
    }

    Ok(())
}

/// Print a variant summary
fn print_variant_summary(variant: &ClinvarVariant) {
    println!("  {} {}", "▸".cyan(), variant.title.bold());
    println!("    Accession:    {}", variant.accession.dimmed());
    println!("    Type:         {}", variant.variation_type.dimmed());
    println!(
        "    Significance: {}",
        significance_colored(&variant.significance, &variant.significance_text)
    );
    println!("    Review:       {}", variant.review_status.dimmed());
    if let Some(evaluated) = variant.evaluated {
        println!(
            "    Evaluated:    {}",
            evaluated.format("%Y-%m-%d").to_string().dimmed()
        );
    }
    if let Some(location) = &variant.location {
        println!("    Position:     {}", location.to_string().cyan());
    }
    if let Some(alleles) = variant.alleles {
        println!("    Change:       {}", alleles);
    }
    println!();
}

/// Color a significance: red for pathogenic, green for benign, yellow for
/// uncertain or conflicting
fn significance_colored(significance: &ClinicalSignificance, text: &str) -> ColoredString {
    if significance.is_pathogenic() {
        text.red().bold()
    } else if significance.is_benign() {
        text.green()
    } else {
        match significance {
            ClinicalSignificance::Uncertain | ClinicalSignificance::Conflicting => text.yellow(),
            _ => text.normal(),
        }
    }
}
