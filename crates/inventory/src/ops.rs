//! Removal, queries, reporting and saving.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use stockkeep_core::{SaveError, StockError, ValidationError};

use crate::store::StockStore;

pub use stockkeep_core::DEFAULT_LOW_STOCK_THRESHOLD;

/// Printable view of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockReport {
    rows: Vec<(String, u64)>,
}

impl StockReport {
    pub fn rows(&self) -> &[(String, u64)] {
        &self.rows
    }
}

impl core::fmt::Display for StockReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "--- Items Report ---")?;
        if self.rows.is_empty() {
            return writeln!(f, "Inventory is empty.");
        }
        for (identifier, quantity) in &self.rows {
            writeln!(f, "{identifier} -> {quantity}")?;
        }
        Ok(())
    }
}

impl StockStore {
    /// Take `quantity` of `identifier` out of stock and return what is left.
    ///
    /// An item that reaches zero is dropped from the store.
    pub fn remove_item(&mut self, identifier: &str, quantity: i64) -> Result<u64, StockError> {
        let requested = u64::try_from(quantity).map_err(|_| {
            ValidationError::invalid_quantity(identifier, quantity, "quantity cannot be negative")
        })?;

        let available = self.quantity_of(identifier).inspect_err(|_| {
            tracing::error!(identifier, "attempted to remove non-existent item");
        })?;

        if requested > available {
            tracing::warn!(identifier, requested, available, "not enough stock to remove");
            return Err(ValidationError::InsufficientStock {
                identifier: identifier.to_string(),
                requested,
                available,
            }
            .into());
        }

        let remaining = available - requested;
        if remaining == 0 {
            self.remove(identifier);
            tracing::info!(identifier, "item removed from stock (quantity dropped to 0)");
        } else {
            self.set(identifier, remaining);
        }
        Ok(remaining)
    }

    /// Quantity on hand; zero for unknown identifiers.
    pub fn get_qty(&self, identifier: &str) -> u64 {
        self.get(identifier).unwrap_or(0)
    }

    /// Identifiers whose quantity is strictly below `threshold`.
    pub fn check_low_items(&self, threshold: u64) -> Vec<String> {
        self.iter()
            .filter(|(_, qty)| *qty < threshold)
            .map(|(id, _)| id.to_string())
            .collect()
    }

    pub fn report(&self) -> StockReport {
        StockReport {
            rows: self.iter().map(|(id, qty)| (id.to_string(), qty)).collect(),
        }
    }

    /// Serialize as a JSON object indented with four spaces.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), serde_json::Error> {
        let mut ser = serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(b"    "));
        self.snapshot().serialize(&mut ser)
    }

    /// Write the store to `path` in the format [`load_file`](Self::load_file) reads.
    pub fn save_file(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let path = path.as_ref();
        let io_err = |source: std::io::Error| SaveError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
        self.write_json(&mut writer)?;
        writer.flush().map_err(io_err)?;

        tracing::info!(path = %path.display(), items = self.len(), "stock data saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockkeep_core::LookupError;

    fn sample() -> StockStore {
        let mut store = StockStore::new();
        store
            .load_data(r#"{"apple": 10, "banana": 2, "grape": 4}"#)
            .unwrap();
        store
    }

    #[test]
    fn remove_subtracts_and_drops_at_zero() {
        let mut store = sample();
        assert_eq!(store.remove_item("apple", 3).unwrap(), 7);
        assert_eq!(store.get_qty("apple"), 7);

        assert_eq!(store.remove_item("banana", 2).unwrap(), 0);
        assert!(!store.contains("banana"));
    }

    #[test]
    fn remove_missing_item_is_a_lookup_error() {
        let mut store = sample();
        let err = store.remove_item("orange", 1).unwrap_err();
        assert!(matches!(
            err,
            StockError::Lookup(LookupError::MissingIdentifier(ref id)) if id == "orange"
        ));
        assert_eq!(store, sample());
    }

    #[test]
    fn remove_more_than_available_is_refused() {
        let mut store = sample();
        let err = store.remove_item("grape", 5).unwrap_err();
        assert!(matches!(
            err,
            StockError::Validation(ValidationError::InsufficientStock {
                requested: 5,
                available: 4,
                ..
            })
        ));
        assert_eq!(store.get_qty("grape"), 4);
    }

    #[test]
    fn remove_negative_is_refused() {
        let mut store = sample();
        assert!(matches!(
            store.remove_item("apple", -1),
            Err(StockError::Validation(ValidationError::InvalidQuantity { .. }))
        ));
        assert_eq!(store, sample());
    }

    #[test]
    fn get_qty_defaults_to_zero() {
        assert_eq!(sample().get_qty("kiwi"), 0);
    }

    #[test]
    fn low_items_are_strictly_below_threshold() {
        let store = sample();
        assert_eq!(
            store.check_low_items(DEFAULT_LOW_STOCK_THRESHOLD),
            vec!["banana".to_string(), "grape".to_string()]
        );
        assert_eq!(store.check_low_items(4), vec!["banana".to_string()]);
        assert!(store.check_low_items(0).is_empty());
    }

    #[test]
    fn report_lists_items_or_says_empty() {
        assert_eq!(
            sample().report().to_string(),
            "--- Items Report ---\napple -> 10\nbanana -> 2\ngrape -> 4\n"
        );
        assert_eq!(
            StockStore::new().report().to_string(),
            "--- Items Report ---\nInventory is empty.\n"
        );
    }

    #[test]
    fn json_uses_four_space_indent() {
        let mut out = Vec::new();
        sample().write_json(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "{\n    \"apple\": 10,\n    \"banana\": 2,\n    \"grape\": 4\n}"
        );
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let store = sample();
        store.save_file(&path).unwrap();

        let mut reloaded = StockStore::new();
        reloaded.load_file(&path).unwrap();
        assert_eq!(reloaded, store);
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = sample()
            .save_file(dir.path().join("nope").join("inventory.json"))
            .unwrap_err();
        assert!(matches!(err, SaveError::Io { .. }));
    }
}
