//! Logging configuration.

use core::str::FromStr;

pub const LOG_FORMAT_ENV: &str = "STOCKPILE_LOG_FORMAT";

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum LogFormat {
    /// `<timestamp> - <LEVEL> - <message>` lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Raw value of an unknown format setting; reported once logging is up.
    pub unrecognized_format: Option<String>,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(LOG_FORMAT_ENV) {
            None => Self::default(),
            Some(raw) => match raw.parse() {
                Ok(format) => Self {
                    format,
                    unrecognized_format: None,
                },
                Err(_) => Self {
                    format: LogFormat::Text,
                    unrecognized_format: Some(raw),
                },
            },
        }
    }

    pub fn with_format(format: LogFormat) -> Self {
        Self {
            format,
            unrecognized_format: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_text() {
        assert_eq!(LogConfig::from_lookup(|_| None).format, LogFormat::Text);
    }

    #[test]
    fn parses_json_case_insensitively() {
        let config = LogConfig::from_lookup(|_| Some(" JSON ".to_string()));
        assert_eq!(config, LogConfig::with_format(LogFormat::Json));
    }

    #[test]
    fn unknown_format_falls_back_and_is_remembered() {
        let config = LogConfig::from_lookup(|_| Some("xml".to_string()));
        assert_eq!(config.format, LogFormat::Text);
        assert_eq!(config.unrecognized_format.as_deref(), Some("xml"));
    }
}
