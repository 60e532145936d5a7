//! Genome command handlers
//!
//! Handles assembly and chromosome listing against the UCSC browser API.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;

use crate::config::Config;
use crate::format::format_bases;
use locus_client::UcscClient;
use locus_core::domain::genome::GenomeAssembly;

/// Genome subcommands
#[derive(Subcommand)]
pub enum GenomeCommands {
    /// List available assemblies
    List {
        /// Filter by organism (case-insensitive substring)
        #[arg(short, long)]
        organism: Option<String>,

        /// Include assemblies UCSC no longer serves
        #[arg(long)]
        all: bool,
    },
    /// List the chromosomes of an assembly
    Chromosomes {
        /// Assembly id, e.g. hg38
        genome: String,

        /// Include unplaced scaffolds and alt contigs
        #[arg(long)]
        all: bool,
    },
}

/// Handle genome commands
pub async fn handle_genome_command(command: GenomeCommands, config: &Config) -> Result<()> {
    let client = UcscClient::new(&config.ucsc_url);

    match command {
        GenomeCommands::List { organism, all } => list_genomes(&client, organism, all).await,
        GenomeCommands::Chromosomes { genome, all } => {
            list_chromosomes(&client, &genome, all).await
        }
    }
}

/// List assemblies, active ones by default, grouped by organism
async fn list_genomes(client: &UcscClient, organism: Option<String>, all: bool) -> Result<()> {
    let mut assemblies = client
        .list_genomes()
        .await
        .context("Failed to load genome data")?;

    if !all {
        assemblies.retain(|a| a.active);
    }
    if let Some(filter) = organism {
        let needle = filter.to_lowercase();
        assemblies.retain(|a| a.organism.to_lowercase().contains(&needle));
    }

    if assemblies.is_empty() {
        println!("{}", "No assemblies found.".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Found {} assemblies:", assemblies.len()).bold()
    );
    // Group under organism headings, organisms in order-key order
    for (organism, members) in group_by_organism(&assemblies) {
        println!();
        println!("{}", organism.bold());
        for assembly in members {
            print_assembly_summary(assembly);
        }
    }

    Ok(())
}

/// Partition assemblies by organism, keeping first-appearance order
fn group_by_organism(assemblies: &[GenomeAssembly]) -> Vec<(&str, Vec<&GenomeAssembly>)> {
    let mut groups: Vec<(&str, Vec<&GenomeAssembly>)> = Vec::new();
    for assembly in assemblies {
        match groups.iter_mut().find(|(name, _)| *name == assembly.organism) {
            Some((_, members)) => members.push(assembly),
            None => groups.push((assembly.organism.as_str(), vec![assembly])),
        }
    }
    groups
}

/// List chromosomes in natural order, placed ones by default
async fn list_chromosomes(client: &UcscClient, genome: &str, all: bool) -> Result<()> {
    let mut chromosomes = client
        .list_chromosomes(genome)
        .await
        .context("Failed to load chromosome data")?;

    let total = chromosomes.len();
    if !all {
        chromosomes.retain(|c| c.is_placed());
    }

    println!(
        "{}",
        format!("{} chromosome(s) in {}:", chromosomes.len(), genome).bold()
    );
    for chromosome in &chromosomes {
        println!(
            "  {:<26} {:>15} bp",
            chromosome.name,
            format_bases(chromosome.size)
        );
    }
    if !all && chromosomes.len() < total {
        println!();
        println!(
            "{}",
            format!(
                "({} scaffolds hidden; pass --all to show them)",
                total - chromosomes.len()
            )
            .dimmed()
        );
    }

    Ok(())
}

/// Print an assembly summary
fn print_assembly_summary(assembly: &GenomeAssembly) {
    println!(
        "  {} {} {}",
        "▸".cyan(),
        assembly.id.bold(),
        assembly.description
    );
    println!("    Source: {}", assembly.source_name.dimmed());
    if !assembly.active {
        println!("    Status: {}", "inactive".yellow());
    }
}
