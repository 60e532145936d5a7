//! Gene command handlers
//!
//! Search goes through the Clinical Tables autocomplete service; full
//! records come from NCBI esummary.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;

use crate::config::Config;
use crate::format::format_bases;
use locus_client::{EutilsClient, GeneSearchClient};
use locus_core::domain::gene::{Gene, GeneDetails};

/// Gene subcommands
#[derive(Subcommand)]
pub enum GeneCommands {
    /// Search genes by symbol or name
    Search {
        /// Search term, e.g. BRCA
        term: String,

        /// Maximum number of matches
        #[arg(long, default_value = "10")]
        limit: u32,
    },
    /// Show the full NCBI record for a gene
    Info {
        /// NCBI GeneID, e.g. 672
        gene_id: String,
    },
}

/// Handle gene commands
pub async fn handle_gene_command(command: GeneCommands, config: &Config) -> Result<()> {
    match command {
        GeneCommands::Search { term, limit } => search_genes(config, &term, limit).await,
        GeneCommands::Info { gene_id } => gene_info(config, &gene_id).await,
    }
}

/// Search genes matching a term
async fn search_genes(config: &Config, term: &str, limit: u32) -> Result<()> {
    let client = GeneSearchClient::new(&config.search_url);
    let genes = client
        .search(term, limit)
        .await
        .context("Failed to search genes")?;

    if genes.is_empty() {
        println!("{}", format!("No genes match {:?}.", term).yellow());
        return Ok(());
    }

    println!("{}", format!("Found {} gene(s):", genes.len()).bold());
    println!();
    for gene in &genes {
        print_gene_summary(gene);
    }

    Ok(())
}

/// Fetch and display a full gene record
async fn gene_info(config: &Config, gene_id: &str) -> Result<()> {
    let client = EutilsClient::new(&config.eutils_url);
    let details = client
        .gene_details(gene_id)
        .await
        .context("Failed to load gene details")?;

    print_gene_details(&details);

    Ok(())
}

/// Print a gene search hit
fn print_gene_summary(gene: &Gene) {
    println!(
        "  {} {} {}",
        "▸".cyan(),
        gene.symbol.bold(),
        gene.description
    );
    println!("    GeneID:   {}", gene.gene_id.dimmed());
    println!(
        "    Location: {} {}",
        gene.map_location,
        format!("(chr{})", gene.chromosome).dimmed()
    );
    println!();
}

/// Print detailed gene information
fn print_gene_details(details: &GeneDetails) {
    println!("{}", "Gene Details:".bold());
    println!("  GeneID:      {}", details.gene_id.cyan());
    println!("  Symbol:      {}", details.symbol.bold());
    println!("  Description: {}", details.description);
    if let Some(organism) = &details.organism {
        println!(
            "  Organism:    {} ({})",
            organism.scientific_name, organism.common_name
        );
    }
    println!(
        "  Location:    {} (chr{})",
        details.map_location, details.chromosome
    );
    if let Some(bounds) = details.bounds {
        // 1-based inclusive for display
        println!(
            "  Span:        {}-{} ({} bases)",
            bounds.min + 1,
            bounds.max + 1,
            format_bases(bounds.span())
        );
    }
    if let Some(accession) = &details.accession {
        println!("  Accession:   {}", accession.dimmed());
    }
    if let Some(exons) = details.exon_count {
        println!("  Exons:       {}", exons);
    }
    if !details.summary.is_empty() {
        println!("\n{}", "Summary:".bold());
        println!("{}", details.summary);
    }
}
