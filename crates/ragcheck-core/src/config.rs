//! Validation configuration.
//!
//! Uses Figment to merge `ragcheck.toml` + `RAGCHECK_*` env vars into a
//! typed, process-wide config. Loaded once at startup, read-only after.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Number of hits to retrieve per query.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Minimum similarity score for a hit to count as relevant.
    #[serde(default = "default_relevance_threshold")]
    pub relevance_threshold: f32,
    /// Attempts per collaborator call before surfacing the failure.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Upper bound for a single embed or search call.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// First backoff delay; doubled per attempt, jitter added on top.
    #[serde(default = "default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,
}

fn default_top_k() -> usize {
    5
}
fn default_relevance_threshold() -> f32 {
    0.7
}
fn default_max_retries() -> u32 {
    3
}
fn default_request_timeout_ms() -> u64 {
    10_000
}
fn default_retry_base_delay_ms() -> u64 {
    500
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            relevance_threshold: default_relevance_threshold(),
            max_retries: default_max_retries(),
            request_timeout_ms: default_request_timeout_ms(),
            retry_base_delay_ms: default_retry_base_delay_ms(),
        }
    }
}

impl ValidationConfig {
    /// Load from `ragcheck.toml` merged with `RAGCHECK_*` env vars.
    /// Missing or out-of-range settings are fatal at startup.
    pub fn load() -> Result<Self> {
        Self::from_figment(
            Figment::new()
                .merge(Toml::file("ragcheck.toml"))
                .merge(Env::prefixed("RAGCHECK_")),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Self = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(Error::Config("top_k must be at least 1".to_string()));
        }
        if !(0.0..=1.0).contains(&self.relevance_threshold) {
            return Err(Error::Config(format!(
                "relevance_threshold must be within [0, 1], got {}",
                self.relevance_threshold
            )));
        }
        if self.request_timeout_ms == 0 {
            return Err(Error::Config(
                "request_timeout_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
