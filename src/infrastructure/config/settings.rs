//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; `NORTHWIND_DATABASE` overrides
//! the database path.
//!
//! # Example
//!
//! ```no_run
//! use northwind::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     let _log = config.logging.dispatch()?;
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::console::ConsoleConfig;
use super::logging::LoggingConfig;
use crate::application::context::WorkflowSettings;
use crate::error::{ConfigError, Result};

/// Environment variable that replaces the configured database path.
pub const DATABASE_ENV: &str = "NORTHWIND_DATABASE";

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. Every section is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Path to SQLite database file.
    ///
    /// Defaults to "northwind.db" in the current directory.
    #[serde(default = "default_database_path")]
    pub database: String,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Interactive console behavior.
    #[serde(default)]
    pub console: ConsoleConfig,

    /// Workflow strictness switches.
    #[serde(default)]
    pub workflow: WorkflowSettings,
}

fn default_database_path() -> String {
    "northwind.db".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database_path(),
            logging: LoggingConfig::default(),
            console: ConsoleConfig::default(),
            workflow: WorkflowSettings::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.finish()
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// Used for the default location only; an explicitly named file that
    /// does not exist should go through [`Config::load`] and fail.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be loaded.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Self::default().finish()
        }
    }

    fn finish(mut self) -> Result<Self> {
        if let Ok(database) = std::env::var(DATABASE_ENV) {
            if !database.trim().is_empty() {
                self.database = database;
            }
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns the first invalid or missing field.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.database.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "database" }.into());
        }
        self.logging.validate()
    }

    /// Render as TOML, the way `config show` prints it.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::error::Error::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.logging.level, "info");
        assert!(config.console.clear_screen);
        assert!(!config.workflow.check_unique_on_edit);
    }

    #[test]
    fn sections_override_defaults() {
        let config = Config::parse_toml(
            r#"
            database = "catalog.db"

            [logging]
            level = "debug"
            format = "json"
            file = "northwind.log"

            [console]
            clear_screen = false

            [workflow]
            check_unique_on_edit = true
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.file.as_deref(), Some("northwind.log"));
        assert!(!config.console.clear_screen);
        assert!(config.workflow.check_unique_on_edit);
    }

    #[test]
    fn unknown_level_is_rejected() {
        let err = Config::parse_toml("[logging]\nlevel = \"loud\"").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "logging.level",
                ..
            })
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Config::parse_toml("database = ").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_default_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.console, ConsoleConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
    }

    #[test]
    fn shown_config_parses_back() {
        let config = Config::default();
        let shown = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&shown).unwrap();
        assert_eq!(parsed, config);
    }
}
