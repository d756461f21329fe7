use std::collections::BTreeMap;

use stockkeep_core::LookupError;

/// Identifier → quantity mapping, keyed and iterated in identifier order.
pub type StockMap = BTreeMap<String, u64>;

/// The single source of truth for current inventory.
///
/// Writers need `&mut self`; sharing one store between threads goes through
/// [`crate::global`] or an embedder-provided lock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockStore {
    items: StockMap,
}

impl StockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity on hand, `None` if the identifier was never stocked.
    pub fn get(&self, identifier: &str) -> Option<u64> {
        self.items.get(identifier).copied()
    }

    /// Lookup for update-only paths, where an absent key is a distinct condition.
    pub fn quantity_of(&self, identifier: &str) -> Result<u64, LookupError> {
        self.get(identifier)
            .ok_or_else(|| LookupError::MissingIdentifier(identifier.to_string()))
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.items.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.items.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Owned copy of the current contents.
    pub fn snapshot(&self) -> StockMap {
        self.items.clone()
    }

    /// Swap the whole mapping for `items`, returning the previous one.
    ///
    /// Nothing is merged: keys absent from `items` are gone afterwards.
    pub fn replace(&mut self, items: StockMap) -> StockMap {
        std::mem::replace(&mut self.items, items)
    }

    pub(crate) fn set(&mut self, identifier: &str, quantity: u64) {
        self.items.insert(identifier.to_string(), quantity);
    }

    pub(crate) fn remove(&mut self, identifier: &str) -> Option<u64> {
        self.items.remove(identifier)
    }
}

impl From<StockMap> for StockStore {
    fn from(items: StockMap) -> Self {
        Self { items }
    }
}
