//! Stock error model.

use std::path::PathBuf;

use thiserror::Error;

/// Result type used across the stock crates.
pub type StockResult<T> = Result<T, StockError>;

/// A load source could not be turned into a stock mapping.
///
/// The store is never modified when one of these is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source did not parse to a mapping of identifier to non-negative integer.
    #[error("malformed stock source: {reason}")]
    MalformedSource { reason: String },

    /// The source could not be read at all.
    #[error("stock source {} unavailable: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedSource {
            reason: reason.into(),
        }
    }
}

/// A requested stock change was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Negative quantity, or a change that would leave the stored value out of range.
    #[error("invalid quantity {quantity} for {identifier}: {reason}")]
    InvalidQuantity {
        identifier: String,
        quantity: i64,
        reason: String,
    },

    #[error("identifier cannot be empty")]
    EmptyIdentifier,

    #[error("cannot remove {requested} of {identifier}: only {available} in stock")]
    InsufficientStock {
        identifier: String,
        requested: u64,
        available: u64,
    },
}

impl ValidationError {
    pub fn invalid_quantity(
        identifier: impl Into<String>,
        quantity: i64,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidQuantity {
            identifier: identifier.into(),
            quantity,
            reason: reason.into(),
        }
    }
}

/// An update-only path was given an identifier the store does not hold.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("no stock recorded for {0}")]
    MissingIdentifier(String),
}

/// The store could not be written out.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to write stock to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize stock: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Umbrella error for callers that don't care which operation failed.
#[derive(Debug, Error)]
pub enum StockError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Save(#[from] SaveError),

    /// A writer panicked while holding the process-wide store.
    #[error("stock store lock poisoned")]
    Poisoned,
}
