//! Runtime configuration, read from the environment.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Quantity below which an item counts as running low.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 5;

/// File the stock is loaded from and saved to when no path is given.
pub const DEFAULT_DATA_FILE: &str = "inventory.json";

pub const ENV_DATA_FILE: &str = "STOCKKEEP_DATA_FILE";
pub const ENV_LOW_STOCK_THRESHOLD: &str = "STOCKKEEP_LOW_STOCK_THRESHOLD";
pub const ENV_LOG_FORMAT: &str = "STOCKKEEP_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Log output format.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockConfig {
    pub data_file: PathBuf,
    pub low_stock_threshold: u64,
    pub log_format: LogFormat,
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            log_format: LogFormat::default(),
        }
    }
}

impl StockConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Unset keys fall back to defaults; set-but-unparsable keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_DATA_FILE).filter(|v| !v.trim().is_empty()) {
            config.data_file = PathBuf::from(path);
        }

        if let Some(raw) = lookup(ENV_LOW_STOCK_THRESHOLD) {
            config.low_stock_threshold =
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::Invalid {
                        key: ENV_LOW_STOCK_THRESHOLD,
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?;
        }

        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            config.log_format = match raw.trim().to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" => LogFormat::Pretty,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: ENV_LOG_FORMAT,
                        value: raw,
                        reason: "expected `json` or `pretty`".to_string(),
                    });
                }
            };
        }

        Ok(config)
    }
}
