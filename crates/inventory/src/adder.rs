//! Adding stock, one item at a time.

use stockkeep_core::{LookupError, StockError, ValidationError};
use thiserror::Error;

use crate::log::{LogEntry, OperationLog};
use crate::store::StockStore;

/// A refused add. Carries the caller's log back, with the rejection recorded.
#[derive(Debug, Error)]
#[error("add rejected: {error}")]
pub struct AddItemRejected {
    #[source]
    pub error: StockError,
    pub log: OperationLog,
}

impl AddItemRejected {
    pub(crate) fn new(
        identifier: &str,
        quantity: i64,
        error: StockError,
        log: Option<OperationLog>,
    ) -> Self {
        let mut log = log.unwrap_or_default();
        log.record(LogEntry::rejected(identifier, quantity, error.to_string()));
        Self { error, log }
    }

    /// The validation failure behind this rejection, if that's what it was.
    pub fn validation(&self) -> Option<&ValidationError> {
        match &self.error {
            StockError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl StockStore {
    /// Add `quantity` of `identifier`, creating the item if it isn't stocked yet.
    ///
    /// With `log: None` a new, empty log is created for this call alone; pass
    /// an existing log to keep appending to it. Either way the log comes back
    /// with one new entry, in `Ok` on success or inside [`AddItemRejected`].
    pub fn add_item(
        &mut self,
        identifier: &str,
        quantity: i64,
        log: Option<OperationLog>,
    ) -> Result<OperationLog, AddItemRejected> {
        match self.apply_add(identifier, quantity) {
            Ok(total) => {
                let mut log = log.unwrap_or_default();
                log.record(LogEntry::success(identifier, quantity));
                tracing::debug!(identifier, quantity, total, "stock added");
                Ok(log)
            }
            Err(e) => {
                tracing::warn!(identifier, quantity, error = %e, "add rejected");
                Err(AddItemRejected::new(identifier, quantity, e.into(), log))
            }
        }
    }

    fn apply_add(&mut self, identifier: &str, quantity: i64) -> Result<u64, ValidationError> {
        if identifier.trim().is_empty() {
            return Err(ValidationError::EmptyIdentifier);
        }

        let amount = u64::try_from(quantity).map_err(|_| {
            ValidationError::invalid_quantity(identifier, quantity, "quantity cannot be negative")
        })?;

        let total = match self.quantity_of(identifier) {
            Ok(current) => current.checked_add(amount).ok_or_else(|| {
                ValidationError::invalid_quantity(identifier, quantity, "stock would overflow")
            })?,
            Err(LookupError::MissingIdentifier(_)) => amount,
        };

        self.set(identifier, total);
        Ok(total)
    }
}
