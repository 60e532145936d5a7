//! Proxy configuration
//!
//! Defines the configurable parameters of the analysis proxy: the scoring
//! endpoint to forward to, plus the listen address and upstream timeout.

use std::time::Duration;

/// Analysis proxy configuration
///
/// The upstream timeout is generous by default because scoring runs a
/// large model that may cold-start on the first request.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full URL of the remote scoring endpoint requests are forwarded to
    pub inference_url: String,

    /// Address the proxy listens on (e.g., "0.0.0.0:8080")
    pub bind_addr: String,

    /// Maximum time to wait for the scoring endpoint
    pub inference_timeout: Duration,
}

impl Config {
    /// Creates a new configuration with defaults for everything but the
    /// scoring endpoint
    pub fn new(inference_url: String) -> Self {
        Self {
            inference_url,
            bind_addr: "0.0.0.0:8080".to_string(),
            inference_timeout: Duration::from_secs(120),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - LOCUS_INFERENCE_URL (required)
    /// - LOCUS_BIND_ADDR (optional, default: 0.0.0.0:8080)
    /// - LOCUS_INFERENCE_TIMEOUT (optional, seconds, default: 120)
    pub fn from_env() -> anyhow::Result<Self> {
        let inference_url = std::env::var("LOCUS_INFERENCE_URL")
            .map_err(|_| anyhow::anyhow!("LOCUS_INFERENCE_URL environment variable not set"))?;

        let bind_addr =
            std::env::var("LOCUS_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let inference_timeout = std::env::var("LOCUS_INFERENCE_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(120));

        Ok(Self {
            inference_url,
            bind_addr,
            inference_timeout,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.inference_url.is_empty() {
            anyhow::bail!("inference_url cannot be empty");
        }

        if !self.inference_url.starts_with("http://")
            && !self.inference_url.starts_with("https://")
        {
            anyhow::bail!("inference_url must start with http:// or https://");
        }

        if self.bind_addr.is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        if self.inference_timeout.as_secs() == 0 {
            anyhow::bail!("inference_timeout must be greater than 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("https://scorer.example.com/analyze".to_string());
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.inference_timeout, Duration::from_secs(120));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut config = Config::new("https://scorer.example.com/analyze".to_string());
        assert!(config.validate().is_ok());

        // Empty endpoint should fail
        config.inference_url = String::new();
        assert!(config.validate().is_err());

        // Non-HTTP endpoint should fail
        config.inference_url = "scorer.example.com/analyze".to_string();
        assert!(config.validate().is_err());

        config.inference_url = "http://localhost:8000/analyze".to_string();
        assert!(config.validate().is_ok());

        // Zero timeout should fail
        config.inference_timeout = Duration::from_secs(0);
        assert!(config.validate().is_err());
    }
}
