//! Sequence command handler
//!
//! Fetches a reference window from UCSC and renders it 60 bases per line
//! with a 1-based coordinate gutter. A single position can be highlighted,
//! which places a variant in its sequence context.

use anyhow::{Context, Result, bail};
use colored::*;

use crate::config::Config;
use locus_client::UcscClient;
use locus_core::domain::sequence::SequenceWindow;

const BASES_PER_LINE: usize = 60;

/// Range selection as given on the command line
pub struct SequenceRange {
    pub start: Option<u64>,
    pub end: Option<u64>,
    pub position: Option<u64>,
    pub window: u64,
}

/// A validated selection, in the coordinates the fetch expects
#[derive(Debug, PartialEq, Eq)]
enum Selection {
    /// 0-based half-open range
    Explicit { start: u64, end: u64 },
    /// 1-based center position plus window size
    Centered { position: u64, size: u64 },
}

impl SequenceRange {
    fn selection(&self) -> Result<Selection> {
        match (self.start, self.end, self.position) {
            (Some(start), Some(end), None) => {
                if start == 0 {
                    bail!("--start is 1-based and must be >= 1");
                }
                if end < start {
                    bail!("--end must be >= --start");
                }
                // 1-based inclusive on the command line, 0-based half-open inside
                Ok(Selection::Explicit {
                    start: start - 1,
                    end,
                })
            }
            (None, None, Some(position)) => {
                if position == 0 {
                    bail!("--position is 1-based and must be >= 1");
                }
                Ok(Selection::Centered {
                    position,
                    size: self.window,
                })
            }
            _ => bail!("provide either --start with --end, or --position"),
        }
    }
}

/// Fetch and display a sequence window
pub async fn show_sequence(
    config: &Config,
    genome: &str,
    chromosome: &str,
    range: SequenceRange,
    highlight: Option<u64>,
) -> Result<()> {
    let client = UcscClient::new(&config.ucsc_url);

    let window = match range.selection()? {
        Selection::Explicit { start, end } => {
            client.fetch_sequence(genome, chromosome, start, end).await
        }
        Selection::Centered { position, size } => {
            client.fetch_window(genome, chromosome, position, size).await
        }
    }
    .context("Failed to load sequence data")?;

    print_sequence(&window, highlight);

    Ok(())
}

/// Render a window with header and coordinate gutter
fn print_sequence(window: &SequenceWindow, highlight: Option<u64>) {
    let last_position = window.start + window.len() as u64;

    println!("{}", "✓ Sequence loaded".green().bold());
    println!(
        "  Range:  {}",
        format!("{}:{}-{}", window.chromosome, window.start + 1, last_position).cyan()
    );
    println!("  Genome: {}", window.genome);
    println!("  Length: {} bases", window.len());
    if (window.len() as u64) != window.expected_len() {
        println!(
            "  {}",
            format!(
                "Note: upstream returned {} of {} requested bases",
                window.len(),
                window.expected_len()
            )
            .yellow()
        );
    }
    println!();

    let gutter = last_position.to_string().len();
    for (row_start, row) in sequence_rows(window) {
        let rendered = match highlight.and_then(|p| split_row_at(row_start, row, p)) {
            Some((before, base, after)) => {
                format!("{}{}{}", before, base.red().bold(), after)
            }
            None => row.to_string(),
        };
        println!("  {row_start:>gutter$}  {rendered}");
    }
}

/// Chunk a window into rows of at most 60 bases with their 1-based start
fn sequence_rows(window: &SequenceWindow) -> Vec<(u64, &str)> {
    let dna = window.dna.as_str();
    let mut rows = Vec::new();
    let mut offset = 0;
    while offset < dna.len() {
        let end = (offset + BASES_PER_LINE).min(dna.len());
        rows.push((window.start + offset as u64 + 1, &dna[offset..end]));
        offset = end;
    }
    rows
}

/// Split a row around a 1-based position when it falls inside the row
fn split_row_at(row_start: u64, row: &str, position: u64) -> Option<(&str, &str, &str)> {
    let offset = position.checked_sub(row_start)? as usize;
    if offset >= row.len() {
        return None;
    }
    Some((&row[..offset], &row[offset..=offset], &row[offset + 1..]))
}
