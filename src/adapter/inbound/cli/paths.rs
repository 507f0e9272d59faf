//! Path utilities for northwind.
//!
//! Per-user files live under `~/.northwind/`, currently just
//! `~/.northwind/config.toml`.

use std::path::PathBuf;

/// Returns the northwind home directory (`~/.northwind/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".northwind")
}

/// Returns the default config file path (`~/.northwind/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
