//! Core domain types
//!
//! Normalized representations of the records the viewer works with. Most of
//! these mirror the shape of an upstream JSON response; the logic that lives
//! here is the part the viewer owns itself, such as coordinate math and
//! classification parsing.

pub mod analysis;
pub mod gene;
pub mod genome;
pub mod sequence;
pub mod variant;
