//! Handles injected into the selector and workflows at construction time.
//!
//! There is no process-wide logger here: the log sink is a
//! [`tracing::Dispatch`] built at startup and carried in [`Context`]. Each
//! entry point scopes its events to it with [`Context::enter`].

use serde::{Deserialize, Serialize};
use tracing::dispatcher::{self, DefaultGuard, Dispatch};

/// Workflow strictness switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WorkflowSettings {
    /// Re-run the name uniqueness check when an edit changes the name.
    /// Off by default: edits historically skip it.
    pub check_unique_on_edit: bool,
}

/// Logging and settings shared by one console session.
#[derive(Debug, Clone)]
pub struct Context {
    pub settings: WorkflowSettings,
    log: Dispatch,
}

impl Context {
    #[must_use]
    pub fn new(settings: WorkflowSettings, log: Dispatch) -> Self {
        Self { settings, log }
    }

    /// A context that drops every log event.
    #[must_use]
    pub fn silent(settings: WorkflowSettings) -> Self {
        Self::new(settings, Dispatch::none())
    }

    /// Route this thread's `tracing` events to the session's sink until the
    /// guard is dropped. Guards nest.
    #[must_use]
    pub fn enter(&self) -> DefaultGuard {
        dispatcher::set_default(&self.log)
    }

    /// The session's log sink.
    #[must_use]
    pub fn dispatch(&self) -> &Dispatch {
        &self.log
    }
}
