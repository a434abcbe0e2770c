//! Logging setup shared by the stockpile binaries and tests.

pub mod capture;
pub mod config;
pub mod format;
pub mod subscriber;

pub use capture::LogCapture;
pub use config::{LogConfig, LogFormat};
pub use format::LineFormat;

/// Initialize process-wide logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(config: &LogConfig) {
    subscriber::init(config);
}
