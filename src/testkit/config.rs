//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests: logging
//! off, no screen clearing, a database of the caller's choosing.

use std::path::Path;

use crate::infrastructure::config::console::ConsoleConfig;
use crate::infrastructure::config::logging::LoggingConfig;
use crate::infrastructure::config::settings::Config;

/// Defaults with logging off and screen clearing disabled.
pub fn quiet() -> Config {
    Config {
        logging: LoggingConfig {
            level: "off".into(),
            ..LoggingConfig::default()
        },
        console: ConsoleConfig {
            clear_screen: false,
        },
        ..Config::default()
    }
}

/// [`quiet`] pointed at the SQLite file `path`.
pub fn with_database(path: &Path) -> Config {
    Config {
        database: path.display().to_string(),
        ..quiet()
    }
}

/// The TOML form of [`with_database`], for tests that go through a file.
pub fn toml_for(path: &Path) -> String {
    format!(
        "database = {:?}\n\n[logging]\nlevel = \"off\"\n\n[console]\nclear_screen = false\n",
        path.display().to_string()
    )
}
