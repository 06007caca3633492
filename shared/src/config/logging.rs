//! Logging configuration module

use serde::{Deserialize, Serialize};

/// Tracing output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive (trace, debug, info, warn, error, or a full `EnvFilter` string)
    pub level: String,

    /// Log format (pretty, compact)
    #[serde(default = "default_log_format")]
    pub format: LogFormat,

    /// Include source location in logs
    #[serde(default)]
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: default_log_format(),
            source_location: false,
        }
    }
}

impl LoggingConfig {
    /// Create from environment variables
    ///
    /// `VERIFY_LOG_LEVEL` wins over `RUST_LOG`.
    pub fn from_env() -> Self {
        let level = std::env::var("VERIFY_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| String::from("info"));
        let format = match std::env::var("VERIFY_LOG_FORMAT").as_deref() {
            Ok("pretty") => LogFormat::Pretty,
            _ => default_log_format(),
        };

        Self {
            level,
            format,
            ..Default::default()
        }
    }
}

/// Log format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Compact,
}

fn default_log_format() -> LogFormat {
    LogFormat::Compact
}
