//! Process-wide stock store.
//!
//! One [`StockStore`] shared by the whole process, created empty on first use.
//! Every function here takes the lock for a single operation. A sequence of
//! calls (load, then several adds) is not atomic as a whole; embedders that
//! need that must serialize the sequence themselves.

use std::path::Path;
use std::sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockkeep_core::{StockConfig, StockError, StockResult};

use crate::adder::AddItemRejected;
use crate::log::OperationLog;
use crate::ops::StockReport;
use crate::store::{StockMap, StockStore};

static STOCK: LazyLock<RwLock<StockStore>> = LazyLock::new(|| RwLock::new(StockStore::new()));

fn read() -> StockResult<RwLockReadGuard<'static, StockStore>> {
    STOCK.read().map_err(|_| StockError::Poisoned)
}

fn write() -> StockResult<RwLockWriteGuard<'static, StockStore>> {
    STOCK.write().map_err(|_| StockError::Poisoned)
}

/// Run `f` against the shared store under the read lock.
pub fn with_store<R>(f: impl FnOnce(&StockStore) -> R) -> StockResult<R> {
    Ok(f(&*read()?))
}

/// Rebind the shared store to the mapping parsed from `source`.
pub fn load_data(source: &str) -> StockResult<()> {
    write()?.load_data(source)?;
    Ok(())
}

pub fn load_file(path: impl AsRef<Path>) -> StockResult<()> {
    write()?.load_file(path)?;
    Ok(())
}

/// Load the data file named by `config`.
pub fn load_configured(config: &StockConfig) -> StockResult<()> {
    load_file(&config.data_file)
}

/// Items below the threshold named by `config`.
pub fn configured_low_items(config: &StockConfig) -> StockResult<Vec<String>> {
    check_low_items(config.low_stock_threshold)
}

/// Swap in `items` wholesale, returning what was there before.
pub fn replace(items: StockMap) -> StockResult<StockMap> {
    Ok(write()?.replace(items))
}

pub fn add_item(
    identifier: &str,
    quantity: i64,
    log: Option<OperationLog>,
) -> Result<OperationLog, AddItemRejected> {
    match write() {
        Ok(mut store) => store.add_item(identifier, quantity, log),
        Err(e) => Err(AddItemRejected::new(identifier, quantity, e, log)),
    }
}

pub fn remove_item(identifier: &str, quantity: i64) -> StockResult<u64> {
    write()?.remove_item(identifier, quantity)
}

pub fn get_qty(identifier: &str) -> StockResult<u64> {
    with_store(|s| s.get_qty(identifier))
}

pub fn check_low_items(threshold: u64) -> StockResult<Vec<String>> {
    with_store(|s| s.check_low_items(threshold))
}

pub fn snapshot() -> StockResult<StockMap> {
    with_store(StockStore::snapshot)
}

pub fn report() -> StockResult<StockReport> {
    with_store(StockStore::report)
}

pub fn save_file(path: impl AsRef<Path>) -> StockResult<()> {
    read()?.save_file(path)?;
    Ok(())
}
