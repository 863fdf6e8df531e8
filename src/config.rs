// src/config.rs

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "deal_finder.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration. Every field has a default, so an empty
/// (or missing) file gives a working setup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub deal: DealConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub max_workers: usize,
    /// How many enriched uploads are kept in memory.
    pub cache_capacity: usize,
    pub max_upload_bytes: usize,
    /// Fixed RNG seed for simulated yields. When unset the seed is derived
    /// from the uploaded file, so the same file always gives the same deals.
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            max_workers: 8,
            cache_capacity: 16,
            max_upload_bytes: 10 * 1024 * 1024,
            seed: None,
        }
    }
}

/// Assumptions behind the derived deal metrics.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DealConfig {
    /// Simulated gross yield range, in percent.
    pub yield_min: f64,
    pub yield_max: f64,
    /// Flat monthly cost subtracted from rent (£).
    pub monthly_cost: f64,
    /// A listing is undervalued below this fraction of the mean £/m².
    pub undervalued_ratio: f64,
    pub refinance_uplift: f64,
    pub loan_to_value: f64,
    pub qualified_min_roi: f64,
    pub hot_min_roi: f64,
    pub maps_search_url: String,
}

impl Default for DealConfig {
    fn default() -> Self {
        Self {
            yield_min: 5.0,
            yield_max: 6.5,
            monthly_cost: 350.0,
            undervalued_ratio: 0.8,
            refinance_uplift: 1.2,
            loan_to_value: 0.75,
            qualified_min_roi: 5.0,
            hot_min_roi: 10.0,
            maps_search_url: "https://www.google.com/maps/search/".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from `DEAL_FINDER_CONFIG`, or `deal_finder.toml` if unset.
    /// A missing file is not an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var("DEAL_FINDER_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if !Path::new(&path).exists() {
            let cfg = Self::default();
            cfg.validate()?;
            return Ok(cfg);
        }

        Self::load(&path)
    }

    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        let cfg = Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let deal = &self.deal;
        if !(deal.yield_min.is_finite() && deal.yield_max.is_finite())
            || deal.yield_min > deal.yield_max
        {
            return Err(ConfigError::Invalid(format!(
                "yield range {}..={} is empty",
                deal.yield_min, deal.yield_max
            )));
        }
        if deal.undervalued_ratio <= 0.0 {
            return Err(ConfigError::Invalid(
                "undervalued_ratio must be positive".into(),
            ));
        }
        if self.server.max_workers == 0 || self.server.cache_capacity == 0 {
            return Err(ConfigError::Invalid(
                "max_workers and cache_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
