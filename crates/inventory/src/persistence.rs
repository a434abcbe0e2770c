//! Whole-file JSON persistence for [`InventoryStore`].
//!
//! The file is a single JSON object mapping item name to quantity, written
//! with 4-space indentation. `save` truncates and rewrites the file in place;
//! there is no temp-file rename, so a crash mid-write can leave it truncated.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use thiserror::Error;

use stockpile_core::ItemName;

use crate::stock::StockLevel;
use crate::store::InventoryStore;

const INDENT: &[u8] = b"    ";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("inventory file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("could not decode JSON from '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PersistenceError {
    /// A missing file on load means "start fresh", not a failure.
    pub fn is_missing(&self) -> bool {
        matches!(self, PersistenceError::NotFound { .. })
    }
}

impl InventoryStore {
    /// Replace the whole store with the contents of `path`.
    ///
    /// The file is decoded into a scratch map first; the store only changes
    /// once decoding has succeeded, so on any error it is left exactly as it
    /// was. Entries with an empty name or a quantity of zero or below are
    /// dropped with a warning.
    ///
    /// Returns the number of items now in the store.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, PersistenceError> {
        let path = path.as_ref();

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    "Inventory file '{}' not found. Starting fresh.",
                    path.display()
                );
                return Err(PersistenceError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(source) => {
                tracing::error!("Could not read inventory from {}: {source}", path.display());
                return Err(PersistenceError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let decoded: IndexMap<String, StockLevel> =
            match serde_json::from_reader(BufReader::new(file)) {
                Ok(decoded) => decoded,
                Err(source) if source.is_io() => {
                    tracing::error!("Could not read inventory from {}: {source}", path.display());
                    return Err(PersistenceError::Io {
                        path: path.to_path_buf(),
                        source: source.into(),
                    });
                }
                Err(source) => {
                    tracing::error!(
                        "Could not decode JSON from '{}'. Starting fresh.",
                        path.display()
                    );
                    return Err(PersistenceError::Decode {
                        path: path.to_path_buf(),
                        source,
                    });
                }
            };

        let mut stock = IndexMap::with_capacity(decoded.len());
        for (key, level) in decoded {
            let Ok(name) = ItemName::parse(key) else {
                tracing::warn!("Ignoring entry with an empty item name.");
                continue;
            };
            if !level.is_positive() {
                tracing::warn!("Ignoring item '{name}' with non-positive quantity {level}.");
                continue;
            }
            stock.insert(name, level);
        }

        self.stock = stock;
        tracing::info!("Inventory loaded successfully from {}.", path.display());
        Ok(self.stock.len())
    }

    /// Write the whole store to `path`, overwriting any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();

        match self.write_json(path) {
            Ok(()) => {
                tracing::info!("Inventory saved successfully to {}.", path.display());
                Ok(())
            }
            Err(source) => {
                tracing::error!("Could not save inventory to {}: {source}", path.display());
                Err(PersistenceError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    fn write_json(&self, path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        let mut serializer =
            Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
        self.stock.serialize(&mut serializer)?;
        writer.flush()
    }
}
