//! In-memory stock keeping.
//!
//! A [`StockStore`] maps item identifiers to quantities. It is filled
//! wholesale by the loader ([`StockStore::load_data`]) and then changed one
//! item at a time ([`StockStore::add_item`], [`StockStore::remove_item`]).
//! [`global`] exposes one process-wide instance of the same operations.

pub mod adder;
pub mod global;
pub mod loader;
pub mod log;
pub mod ops;
pub mod store;

pub use adder::AddItemRejected;
pub use loader::parse_source;
pub use log::{LogEntry, OperationLog, Outcome};
pub use ops::{DEFAULT_LOW_STOCK_THRESHOLD, StockReport};
pub use store::{StockMap, StockStore};
