//! Locus CLI
//!
//! Command-line viewer for genome assemblies, genes, reference sequence,
//! and ClinVar variants, with variant scoring through the analysis proxy.

mod commands;
mod config;
mod format;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use locus_client::{EUTILS_API_URL, GENE_SEARCH_URL, UCSC_API_URL};

#[derive(Parser)]
#[command(name = "locus")]
#[command(about = "Genome browser and variant analysis CLI", long_about = None)]
struct Cli {
    /// UCSC Genome Browser API URL
    #[arg(long, env = "LOCUS_UCSC_URL", default_value = UCSC_API_URL)]
    ucsc_url: String,

    /// NCBI Clinical Tables gene search URL
    #[arg(long, env = "LOCUS_SEARCH_URL", default_value = GENE_SEARCH_URL)]
    search_url: String,

    /// NCBI E-utilities URL
    #[arg(long, env = "LOCUS_EUTILS_URL", default_value = EUTILS_API_URL)]
    eutils_url: String,

    /// Variant analysis endpoint (a locus-server, or the scorer itself)
    #[arg(
        long,
        env = "LOCUS_ANALYZER_URL",
        default_value = "http://localhost:8080/api/analyze-variant"
    )]
    analyzer_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        ucsc_url: cli.ucsc_url,
        search_url: cli.search_url,
        eutils_url: cli.eutils_url,
        analyzer_url: cli.analyzer_url,
    };

    handle_command(cli.command, &config).await
}
