//! Tracing/logging setup shared by binaries and tests.

use stockkeep_core::{LogFormat, StockConfig};

/// Initialize process-wide logging from the environment.
///
/// The format comes from `STOCKKEEP_LOG_FORMAT`; an invalid value falls back
/// to JSON and is reported once the subscriber is up. Safe to call multiple
/// times (subsequent calls are no-ops).
pub fn init() {
    match StockConfig::from_env() {
        Ok(config) => tracing::init(config.log_format),
        Err(e) => {
            tracing::init(LogFormat::default());
            ::tracing::warn!(error = %e, "invalid logging configuration; using defaults");
        }
    }
}

/// Initialize logging with an explicit format.
pub fn init_with(format: LogFormat) {
    tracing::init(format);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
