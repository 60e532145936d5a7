//! Locus Core
//!
//! Core types for the Locus variant-analysis viewer.
//!
//! This crate contains:
//! - Domain types: normalized records from the genome and variant services
//!   (assemblies, chromosomes, genes, sequence windows, ClinVar variants)
//! - DTOs: the analyze-variant wire shapes shared by client, proxy, and CLI

pub mod domain;
pub mod dto;
