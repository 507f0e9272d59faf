//! Logging configuration and initialization.
//!
//! Nothing here installs a global subscriber. [`LoggingConfig::dispatch`]
//! builds a [`Dispatch`] that the caller hands to whoever needs to log.

use std::fs::OpenOptions;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::Dispatch;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Accepted values for `logging.level`.
pub const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Accepted values for `logging.format`.
pub const FORMATS: [&str; 3] = ["pretty", "compact", "json"];

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    /// Append log lines to this file instead of stderr.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl LoggingConfig {
    /// Build the log sink for this configuration.
    ///
    /// `RUST_LOG` takes precedence over `level` when it is set. Events go to
    /// stderr, which leaves stdout to the console, or to `file`.
    ///
    /// # Errors
    /// Returns an error if the log file cannot be opened.
    pub fn dispatch(&self) -> Result<Dispatch> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .map_err(|e| ConfigError::InvalidValue {
                field: "logging.level",
                reason: e.to_string(),
            })?;

        let (writer, ansi) = match &self.file {
            Some(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                (BoxMakeWriter::new(Mutex::new(file)), false)
            }
            None => (BoxMakeWriter::new(std::io::stderr), true),
        };

        let builder = fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(ansi);
        let dispatch = match self.format.as_str() {
            "json" => Dispatch::new(builder.json().finish()),
            "compact" => Dispatch::new(builder.compact().finish()),
            _ => Dispatch::new(builder.pretty().finish()),
        };
        Ok(dispatch)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !LEVELS.contains(&self.level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: format!("must be one of {}", LEVELS.join(", ")),
            }
            .into());
        }
        if !FORMATS.contains(&self.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("must be one of {}", FORMATS.join(", ")),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
            file: None,
        }
    }
}
