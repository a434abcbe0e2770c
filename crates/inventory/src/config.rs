//! Store configuration (file location, low-stock threshold).
//!
//! Values come from the environment; command-line flags in the binary may
//! override them afterwards.

use std::path::PathBuf;

use stockpile_core::{DomainError, DomainResult};

/// File used by `load`/`save` when no path is configured.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

/// Inclusive threshold used by `check_low_items` when none is configured.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

pub const FILE_ENV: &str = "STOCKPILE_FILE";
pub const THRESHOLD_ENV: &str = "STOCKPILE_LOW_STOCK_THRESHOLD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    pub path: PathBuf,
    pub low_stock_threshold: i64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INVENTORY_FILE),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl InventoryConfig {
    /// Read `STOCKPILE_FILE` and `STOCKPILE_LOW_STOCK_THRESHOLD`.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`InventoryConfig::from_env`], with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup(FILE_ENV).filter(|p| !p.trim().is_empty()) {
            config.path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(THRESHOLD_ENV) {
            config.low_stock_threshold = raw.trim().parse().map_err(|_| {
                DomainError::validation(format!(
                    "{THRESHOLD_ENV} must be an integer, got {raw:?}"
                ))
            })?;
        }

        Ok(config)
    }
}
