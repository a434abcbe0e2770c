use std::io;

use clap::Parser;

use stockpile_cli::Cli;
use stockpile_inventory::InventoryConfig;
use stockpile_observability::LogConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    stockpile_observability::init(&LogConfig::from_env());

    let config = cli.apply_overrides(InventoryConfig::from_env()?);
    tracing::debug!("Using inventory file {}.", config.path.display());

    let mut out = io::stdout().lock();
    stockpile_cli::run(cli.command.unwrap_or_default(), &config, &mut out)
}
