//! Replacing the store from a serialized source.
//!
//! Sources are JSON objects of identifier to non-negative integer. They are
//! decoded straight into typed data by `serde_json`, which only ever yields
//! passive values, so no part of a source is ever evaluated.

use std::path::Path;

use stockkeep_core::LoadError;

use crate::store::{StockMap, StockStore};

/// Decode and validate a source without touching any store.
pub fn parse_source(source: &str) -> Result<StockMap, LoadError> {
    let items: StockMap =
        serde_json::from_str(source).map_err(|e| LoadError::malformed(e.to_string()))?;

    if items.keys().any(|k| k.trim().is_empty()) {
        return Err(LoadError::malformed("identifier cannot be empty"));
    }

    Ok(items)
}

impl StockStore {
    /// Replace the whole store with the contents of `source`.
    ///
    /// All-or-nothing: on error the store is exactly as it was.
    pub fn load_data(&mut self, source: &str) -> Result<(), LoadError> {
        let items = match parse_source(source) {
            Ok(items) => items,
            Err(e) => {
                tracing::error!(error = %e, "rejected stock source; keeping current stock");
                return Err(e);
            }
        };

        let count = items.len();
        self.replace(items);
        tracing::info!(items = count, "stock data loaded");
        Ok(())
    }

    /// Read `path` and [`load_data`](Self::load_data) its contents.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| {
            tracing::error!(path = %path.display(), error = %source, "stock file unreadable; keeping current stock");
            LoadError::SourceUnavailable {
                path: path.to_path_buf(),
                source,
            }
        })?;

        self.load_data(&source)?;
        tracing::info!(path = %path.display(), "stock file loaded");
        Ok(())
    }
}
