use indexmap::IndexMap;

use stockpile_core::{DomainError, DomainResult, ItemName};

use crate::stock::StockLevel;

/// Outcome of a successful [`InventoryStore::remove`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Removal {
    /// Everything on hand was taken; the item was dropped from the store.
    Depleted,
    /// Quantity left after the decrement, as an integer view. The stored
    /// value is always > 0; a fractional remainder below 1 reads as 0 here.
    Remaining(i64),
}

/// In-memory inventory: item name -> stock level, in insertion order.
///
/// Invariant: every numeric entry is strictly positive. Items that reach
/// zero are removed instead of being stored as zero.
///
/// Every failure is logged where it is detected (`error!` for bad input and
/// corrupt data, `warn!` for rejected or missing items) and also returned, so
/// callers may either ignore the result or branch on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryStore {
    pub(crate) stock: IndexMap<ItemName, StockLevel>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` units of `item`, creating the entry if needed.
    ///
    /// Returns the new total (integer view, see [`StockLevel::quantity`]).
    pub fn add(&mut self, item: &str, qty: i64) -> DomainResult<i64> {
        let name = parse_item(item)?;

        if qty <= 0 {
            tracing::warn!("Quantity must be positive. Received: {qty}. Not adding.");
            return Err(DomainError::rejected(format!(
                "quantity must be positive, received {qty}"
            )));
        }

        let current = self
            .stock
            .get(item)
            .cloned()
            .unwrap_or(StockLevel::Quantity(0));
        if current.is_corrupt() {
            tracing::error!("Data for item '{item}' is corrupt. Could not add.");
            return Err(DomainError::corrupt(item));
        }

        let Some(total) = current.checked_add(qty) else {
            tracing::warn!("Adding {qty} of {item} would overflow the stored total. Not adding.");
            return Err(DomainError::rejected(format!(
                "adding {qty} to {current} overflows"
            )));
        };

        tracing::info!("Added {qty} of {item}. New total: {total}.");
        let new_total = total.quantity().unwrap_or_default();
        // Existing keys keep their position.
        self.stock.insert(name, total);
        Ok(new_total)
    }

    /// Remove `qty` units of `item`.
    ///
    /// When `qty` covers everything on hand (including exact equality) the
    /// item is dropped entirely.
    pub fn remove(&mut self, item: &str, qty: i64) -> DomainResult<Removal> {
        parse_item(item)?;

        if qty <= 0 {
            tracing::error!("Invalid quantity: {qty}. Must be a positive integer.");
            return Err(DomainError::validation(format!(
                "quantity must be a positive integer, received {qty}"
            )));
        }

        let Some(level) = self.stock.get_mut(item) else {
            tracing::warn!("Item '{item}' not in stock, cannot remove.");
            return Err(DomainError::not_found(item));
        };

        if level.is_corrupt() {
            tracing::error!("Data for item '{item}' is corrupt. Could not remove.");
            return Err(DomainError::corrupt(item));
        }

        match level.remaining_after(qty) {
            Some(remaining) => {
                tracing::info!("Removed {qty} of {item}. New total: {remaining}.");
                let left = remaining.quantity().unwrap_or_default();
                *level = remaining;
                Ok(Removal::Remaining(left))
            }
            None => {
                // `shift_remove` keeps the relative order of the remaining items.
                self.stock.shift_remove(item);
                tracing::info!("Removed item '{item}' from stock (was {qty} or less).");
                Ok(Removal::Depleted)
            }
        }
    }

    /// Quantity on hand for `item`; 0 when absent.
    ///
    /// Fractional values loaded from a file are truncated. A corrupt stored
    /// value is logged and reported as 0.
    pub fn get_quantity(&self, item: &str) -> i64 {
        let Some(level) = self.stock.get(item) else {
            return 0;
        };
        level.quantity().unwrap_or_else(|| {
            tracing::error!("Data for item '{item}' is corrupt ({level}). Reporting 0.");
            0
        })
    }

    /// Items whose quantity is at or below `threshold`, in store order.
    ///
    /// Corrupt entries have no comparable quantity and are skipped.
    pub fn check_low_items(&self, threshold: i64) -> Vec<&str> {
        self.stock
            .iter()
            .filter(|(_, level)| level.is_at_or_below(threshold))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.stock.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Entries in store (insertion) order.
    pub fn items(&self) -> impl Iterator<Item = (&ItemName, &StockLevel)> {
        self.stock.iter()
    }
}

fn parse_item(item: &str) -> DomainResult<ItemName> {
    ItemName::parse(item).inspect_err(|_| {
        tracing::error!("Invalid item name: {item:?}. Must be a non-empty string.");
    })
}
