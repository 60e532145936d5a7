//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod analyze;
mod gene;
mod genome;
mod sequence;
mod variants;

pub use gene::GeneCommands;
pub use genome::GenomeCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;
use locus_core::domain::sequence::ANALYSIS_WINDOW;
use sequence::SequenceRange;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Browse genome assemblies and chromosomes
    Genome {
        #[command(subcommand)]
        command: GenomeCommands,
    },
    /// Search genes and view gene records
    Gene {
        #[command(subcommand)]
        command: GeneCommands,
    },
    /// View a window of reference sequence
    Sequence {
        /// Assembly id, e.g. hg38
        #[arg(long, default_value = "hg38")]
        genome: String,

        /// UCSC-style chromosome name, e.g. chr17
        #[arg(long)]
        chromosome: String,

        /// 1-based start of the range to show (use with --end)
        #[arg(long, requires = "end", conflicts_with = "position")]
        start: Option<u64>,

        /// 1-based end of the range, inclusive
        #[arg(long, requires = "start", conflicts_with = "position")]
        end: Option<u64>,

        /// 1-based position to center a window on
        #[arg(long)]
        position: Option<u64>,

        /// Window size in bases around --position
        #[arg(long, default_value_t = ANALYSIS_WINDOW, conflicts_with = "start")]
        window: u64,

        /// 1-based position to highlight in the output
        #[arg(long)]
        highlight: Option<u64>,
    },
    /// List ClinVar variants reported for a gene
    Variants {
        /// Gene symbol, e.g. BRCA1
        symbol: String,

        /// Assembly variant positions are reported on
        #[arg(long, default_value = "hg38")]
        genome: String,

        /// Maximum number of variants to fetch
        #[arg(long, default_value = "20")]
        limit: u32,

        /// Only show single nucleotide variants
        #[arg(long)]
        snv_only: bool,
    },
    /// Score a single-nucleotide variant
    Analyze {
        /// Assembly id, e.g. hg38
        #[arg(long, default_value = "hg38")]
        genome: String,

        /// UCSC-style chromosome name, e.g. chr17
        #[arg(long)]
        chromosome: String,

        /// 1-based position of the variant
        #[arg(long)]
        position: u64,

        /// Alternative base (A, C, G, or T)
        #[arg(long)]
        alternative: String,

        /// Compare the prediction against ClinVar records for this gene
        #[arg(long)]
        gene: Option<String>,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
///
/// # Returns
/// Result indicating success or failure
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Genome { command } => genome::handle_genome_command(command, config).await,
        Commands::Gene { command } => gene::handle_gene_command(command, config).await,
        Commands::Sequence {
            genome,
            chromosome,
            start,
            end,
            position,
            window,
            highlight,
        } => {
            let range = SequenceRange {
                start,
                end,
                position,
                window,
            };
            sequence::show_sequence(config, &genome, &chromosome, range, highlight).await
        }
        Commands::Variants {
            symbol,
            genome,
            limit,
            snv_only,
        } => variants::list_variants(config, &symbol, &genome, limit, snv_only).await,
        Commands::Analyze {
            genome,
            chromosome,
            position,
            alternative,
            gene,
        } => analyze::analyze_variant(config, genome, chromosome, position, alternative, gene).await,
    }
}
