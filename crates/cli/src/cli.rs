use std::path::PathBuf;

use clap::{Parser, Subcommand};

use stockpile_inventory::InventoryConfig;

#[derive(Debug, Parser)]
#[command(
    name = "stockpile",
    version,
    about = "Track item quantities in a JSON inventory file"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Inventory file (default: $STOCKPILE_FILE or inventory.json)"
    )]
    pub file: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        allow_negative_numbers = true,
        help = "Low-stock threshold, inclusive (default: $STOCKPILE_LOW_STOCK_THRESHOLD or 5)"
    )]
    pub threshold: Option<i64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Subcommand)]
pub enum Command {
    /// Run the demonstration sequence (default when no command is given).
    #[default]
    Demo,
    /// Add stock for an item and save.
    Add {
        item: String,
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Remove stock for an item and save.
    Remove {
        item: String,
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Print the quantity on hand for an item.
    Get { item: String },
    /// List items at or below the low-stock threshold.
    Low,
    /// Print the stock report.
    Report,
}

impl Cli {
    /// Command-line flags win over environment-derived settings.
    pub fn apply_overrides(&self, mut config: InventoryConfig) -> InventoryConfig {
        if let Some(file) = &self.file {
            config.path = file.clone();
        }
        if let Some(threshold) = self.threshold {
            config.low_stock_threshold = threshold;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_demo() {
        let cli = Cli::try_parse_from(["stockpile"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::Demo);
    }

    #[test]
    fn parses_negative_quantities_for_domain_rejection() {
        let cli = Cli::try_parse_from(["stockpile", "add", "banana", "-2"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Add {
                item: "banana".to_string(),
                qty: -2
            })
        );
    }

    #[test]
    fn non_integer_quantity_is_a_usage_error() {
        assert!(Cli::try_parse_from(["stockpile", "add", "banana", "ten"]).is_err());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from(["stockpile", "low", "--file", "x.json", "--threshold", "9"])
            .unwrap();
        let config = cli.apply_overrides(InventoryConfig::default());
        assert_eq!(config.path, PathBuf::from("x.json"));
        assert_eq!(config.low_stock_threshold, 9);
    }

    #[test]
    fn missing_flags_keep_config() {
        let cli = Cli::try_parse_from(["stockpile", "report"]).unwrap();
        assert_eq!(cli.apply_overrides(InventoryConfig::default()), InventoryConfig::default());
    }
}
