//! Plain-text line format: `<timestamp> - <LEVEL> - <message>`.

use std::fmt;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Local time with millisecond precision, e.g. `2026-10-18 09:14:03,512`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Event formatter producing one `timestamp - LEVEL - message` line per event.
///
/// Structured fields other than the message are appended after it by the
/// field formatter (`key=value`).
#[derive(Debug, Default, Clone, Copy)]
pub struct LineFormat;

pub fn level_label(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARNING",
        Level::INFO => "INFO",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let now = chrono::Local::now();
        write!(
            writer,
            "{} - {} - ",
            now.format(TIMESTAMP_FORMAT),
            level_label(event.metadata().level())
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::LogCapture;

    #[test]
    fn levels_use_long_warning_label() {
        assert_eq!(level_label(&Level::WARN), "WARNING");
        assert_eq!(level_label(&Level::ERROR), "ERROR");
        assert_eq!(level_label(&Level::INFO), "INFO");
    }

    #[test]
    fn lines_have_timestamp_level_and_message() {
        let capture = LogCapture::new();
        tracing::subscriber::with_default(capture.subscriber(), || {
            tracing::warn!("Item 'orange' not in stock, cannot remove.");
        });

        let lines = capture.lines();
        assert_eq!(lines.len(), 1);

        let parts: Vec<&str> = lines[0].splitn(3, " - ").collect();
        assert_eq!(parts.len(), 3);
        let (seconds, millis) = parts[0].split_once(',').expect("millisecond separator");
        assert!(
            chrono::NaiveDateTime::parse_from_str(seconds, "%Y-%m-%d %H:%M:%S").is_ok(),
            "bad timestamp: {}",
            parts[0]
        );
        assert_eq!(millis.len(), 3);
        assert!(millis.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[1], "WARNING");
        assert_eq!(parts[2], "Item 'orange' not in stock, cannot remove.");
    }

    #[test]
    fn extra_fields_follow_the_message() {
        let capture = LogCapture::new();
        tracing::subscriber::with_default(capture.subscriber(), || {
            tracing::info!(items = 3, "Inventory loaded");
        });

        let line = capture.lines().remove(0);
        assert!(line.ends_with(" - INFO - Inventory loaded items=3"), "{line}");
    }

    #[test]
    fn captured_lines_carry_no_escape_codes() {
        let capture = LogCapture::new();
        tracing::subscriber::with_default(capture.subscriber(), || {
            tracing::warn!(item = "apple", qty = 3, "Removed stock");
        });

        let line = capture.lines().remove(0);
        assert!(!line.contains('\x1b'), "{line:?}");
        assert!(line.ends_with("Removed stock item=\"apple\" qty=3"), "{line}");
    }
}
