//! Inventory store: item quantities held in memory and persisted to a JSON file.
//!
//! The store is an owned value; callers create one, mutate it through its
//! operations, and flush it explicitly with [`InventoryStore::save`].
//! Nothing is persisted implicitly.

pub mod config;
pub mod persistence;
pub mod report;
pub mod stock;
pub mod store;

pub use config::{DEFAULT_INVENTORY_FILE, DEFAULT_LOW_STOCK_THRESHOLD, InventoryConfig};
pub use persistence::PersistenceError;
pub use stock::StockLevel;
pub use store::{InventoryStore, Removal};

pub use stockpile_core::{DomainError, DomainResult, ItemName};
