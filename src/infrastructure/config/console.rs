//! Interactive console settings.

use serde::{Deserialize, Serialize};

/// How the interactive console behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Clear the screen after every menu choice. Ignored when output is
    /// not a terminal.
    pub clear_screen: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { clear_screen: true }
    }
}
