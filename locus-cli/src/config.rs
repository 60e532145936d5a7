//! Configuration module
//!
//! Handles CLI configuration: the upstream service URLs every command
//! reads its data from.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the UCSC Genome Browser REST API
    pub ucsc_url: String,
    /// URL of the NCBI Clinical Tables gene search service
    pub search_url: String,
    /// URL of the NCBI E-utilities
    pub eutils_url: String,
    /// Full URL of the analyze endpoint (proxy or scorer)
    pub analyzer_url: String,
}
