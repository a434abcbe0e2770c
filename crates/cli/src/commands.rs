//! Command execution.
//!
//! Store operations log their own failures, so results are mostly ignored
//! here. The exceptions are a load that fails for a reason other than a
//! missing file before a mutating command: the command stops without saving
//! so the unreadable file is not overwritten.

use std::io::Write;

use anyhow::{Context, bail};

use stockpile_inventory::{InventoryConfig, InventoryStore, PersistenceError};

use crate::cli::Command;

pub fn run<W: Write>(
    command: Command,
    config: &InventoryConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut store = InventoryStore::new();
    let loaded = store.load(&config.path);

    match command {
        Command::Demo => demo(&mut store, config, out)?,
        Command::Add { item, qty } => {
            ensure_writable(&loaded)?;
            if store.add(&item, qty).is_ok() {
                writeln!(out, "{item}: {}", store.get_quantity(&item))?;
                let _ = store.save(&config.path);
            }
        }
        Command::Remove { item, qty } => {
            ensure_writable(&loaded)?;
            if store.remove(&item, qty).is_ok() {
                writeln!(out, "{item}: {}", store.get_quantity(&item))?;
                let _ = store.save(&config.path);
            }
        }
        Command::Get { item } => {
            writeln!(out, "{}", store.get_quantity(&item))?;
        }
        Command::Low => {
            for item in store.check_low_items(config.low_stock_threshold) {
                writeln!(out, "{item}")?;
            }
        }
        Command::Report => {
            store.write_report(out).context("writing report")?;
        }
    }

    Ok(())
}

fn ensure_writable(loaded: &Result<usize, PersistenceError>) -> anyhow::Result<()> {
    match loaded {
        Ok(_) => Ok(()),
        Err(e) if e.is_missing() => Ok(()),
        Err(e) => bail!("refusing to overwrite unreadable inventory: {e}"),
    }
}

/// Fixed walkthrough: valid adds, a rejected add, an invalid name, a partial
/// removal and a removal of an unknown item, then query, report and save.
fn demo<W: Write>(
    store: &mut InventoryStore,
    config: &InventoryConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    let _ = store.add("apple", 10);
    let _ = store.add("banana", 25);

    // Rejected: logged and skipped.
    let _ = store.add("banana", -2);
    let _ = store.add("", 10);

    let _ = store.remove("apple", 3);
    let _ = store.remove("orange", 1);

    writeln!(out, "Apple stock: {}", store.get_quantity("apple"))?;
    writeln!(
        out,
        "Low items: {:?}",
        store.check_low_items(config.low_stock_threshold)
    )?;

    store.write_report(out).context("writing report")?;
    let _ = store.save(&config.path);
    Ok(())
}
