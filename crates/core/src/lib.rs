//! `stockkeep-core` — shared building blocks for the stock crates.
//!
//! Error taxonomy and configuration only; no state and no IO beyond reading
//! environment variables.

pub mod config;
pub mod error;

pub use config::{
    ConfigError, DEFAULT_DATA_FILE, DEFAULT_LOW_STOCK_THRESHOLD, LogFormat, StockConfig,
};
pub use error::{LoadError, LookupError, SaveError, StockError, StockResult, ValidationError};
