//! Global subscriber installation.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::config::{LogConfig, LogFormat};
use crate::format::LineFormat;

/// Install the global subscriber described by `config`.
///
/// Filtering follows `RUST_LOG` and defaults to `info`. Output goes to stderr
/// so that reports on stdout stay clean. Safe to call multiple times
/// (subsequent calls are no-ops).
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Text => builder
            .with_ansi(std::io::stderr().is_terminal())
            .event_format(LineFormat)
            .try_init(),
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .try_init(),
    };

    if installed.is_ok() {
        if let Some(raw) = &config.unrecognized_format {
            tracing::warn!("Unknown log format {raw:?}; using text.");
        }
    }
}
