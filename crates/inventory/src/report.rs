//! Human-readable stock report.

use std::io::{self, Write};

use crate::store::InventoryStore;

pub const REPORT_HEADER: &str = "--- Items Report ---";
pub const REPORT_FOOTER: &str = "----------------------";
pub const EMPTY_PLACEHOLDER: &str = "Inventory is empty.";

impl InventoryStore {
    /// Render the report: blank line, header, one `name: quantity` line per
    /// item in store order (or a placeholder), footer, blank line.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{REPORT_HEADER}")?;
        if self.is_empty() {
            writeln!(out, "  {EMPTY_PLACEHOLDER}")?;
        }
        for (name, level) in self.items() {
            writeln!(out, "  {name}: {level}")?;
        }
        writeln!(out, "{REPORT_FOOTER}")?;
        writeln!(out)
    }

    /// Print the report to stdout.
    pub fn print_report(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_report(&mut stdout).and_then(|()| stdout.flush()) {
            tracing::error!("Could not print inventory report: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(store: &InventoryStore) -> String {
        let mut buf = Vec::new();
        store.write_report(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_store_prints_placeholder() {
        let out = render(&InventoryStore::new());
        assert_eq!(
            out,
            "\n--- Items Report ---\n  Inventory is empty.\n----------------------\n\n"
        );
    }

    #[test]
    fn items_are_listed_in_insertion_order() {
        let mut store = InventoryStore::new();
        store.add("zucchini", 2).unwrap();
        store.add("apple", 7).unwrap();

        let out = render(&store);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "",
                REPORT_HEADER,
                "  zucchini: 2",
                "  apple: 7",
                REPORT_FOOTER,
                "",
            ]
        );
        assert!(!out.contains(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn depleted_items_disappear_from_report() {
        let mut store = InventoryStore::new();
        store.add("apple", 3).unwrap();
        store.add("pear", 1).unwrap();
        store.remove("apple", 3).unwrap();

        let out = render(&store);
        assert!(!out.contains("apple"));
        assert!(out.contains("  pear: 1"));
    }
}
