//! In-memory log sink for asserting on diagnostics in tests.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::format::DefaultFields;

use crate::format::LineFormat;

/// Shared buffer that collects formatted log lines.
///
/// Pair with [`tracing::subscriber::with_default`] to scope capture to a
/// closure without touching the global subscriber.
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// A subscriber writing every event (all levels) in [`LineFormat`] into this buffer.
    pub fn subscriber(
        &self,
    ) -> tracing_subscriber::fmt::Subscriber<DefaultFields, LineFormat, LevelFilter, LogCapture> {
        tracing_subscriber::fmt()
            .with_max_level(LevelFilter::TRACE)
            .with_ansi(false)
            .event_format(LineFormat)
            .with_writer(self.clone())
            .finish()
    }

    fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// `(LEVEL, message)` pairs with the timestamp stripped.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.lines()
            .iter()
            .filter_map(|line| {
                let mut parts = line.splitn(3, " - ");
                let _timestamp = parts.next()?;
                let level = parts.next()?;
                let message = parts.next()?;
                Some((level.to_string(), message.to_string()))
            })
            .collect()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
