//! Reference sequence windows and nucleotide validation
//!
//! Coordinates are 0-based half-open inside the system, matching the UCSC
//! sequence endpoint. 1-based positions appear only at the user boundary and
//! are converted here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Width of the sequence window the inference service scores around a
/// variant (the model sees half this on each side of the base).
pub const ANALYSIS_WINDOW: u64 = 8192;

/// A single nucleotide base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

/// Error for input that is not a single A/C/G/T base
#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected a single A/C/G/T base, got {0:?}")]
pub struct InvalidNucleotide(pub String);

impl Nucleotide {
    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::C => 'C',
            Self::G => 'G',
            Self::T => 'T',
        }
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = InvalidNucleotide;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Self::A),
            'C' => Ok(Self::C),
            'G' => Ok(Self::G),
            'T' => Ok(Self::T),
            other => Err(InvalidNucleotide(other.to_string())),
        }
    }
}

impl FromStr for Nucleotide {
    type Err = InvalidNucleotide;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(InvalidNucleotide(s.to_string())),
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A window of reference sequence fetched from the genome browser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceWindow {
    /// Assembly the window was fetched from, e.g. "hg38"
    pub genome: String,
    /// UCSC-style chromosome name, e.g. "chr17"
    pub chromosome: String,
    /// 0-based inclusive start
    pub start: u64,
    /// 0-based exclusive end
    pub end: u64,
    /// Uppercase sequence, one character per base
    pub dna: String,
}

impl SequenceWindow {
    /// Coordinate range of a window of `size` bases centered on a 1-based
    /// position, clamped at the chromosome origin. This reproduces the
    /// window the inference service scores: half the size on each side of
    /// the base itself.
    pub fn centered(position: u64, size: u64) -> (u64, u64) {
        let half = size / 2;
        let zero_based = position.saturating_sub(1);
        let start = zero_based.saturating_sub(half);
        let end = zero_based + half + 1;
        (start, end)
    }

    /// Number of bases actually fetched
    pub fn len(&self) -> usize {
        self.dna.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dna.is_empty()
    }

    /// Number of bases the coordinate range calls for. May differ from
    /// `len()` when the upstream returned a short sequence at a chromosome
    /// edge.
    pub fn expected_len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Offset of a 1-based genomic position within this window, or `None`
    /// when the position falls outside the fetched sequence.
    pub fn offset_of(&self, position: u64) -> Option<usize> {
        let zero_based = position.checked_sub(1)?;
        if zero_based < self.start {
            return None;
        }
        let offset = (zero_based - self.start) as usize;
        (offset < self.dna.len()).then_some(offset)
    }

    /// The base at a 1-based genomic position, if inside the window
    pub fn base_at(&self, position: u64) -> Option<char> {
        let offset = self.offset_of(position)?;
        self.dna.as_bytes().get(offset).map(|b| *b as char)
    }
}
