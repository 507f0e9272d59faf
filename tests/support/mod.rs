#![allow(dead_code)]

pub mod temp_db;

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::Dispatch;

use northwind::application::{Context, WorkflowSettings};
use northwind::testkit::console::ScriptedConsole;

/// A context that logs nowhere, with default strictness.
pub fn ctx() -> Context {
    Context::silent(WorkflowSettings::default())
}

/// A context that re-checks names on edit.
pub fn strict_ctx() -> Context {
    Context::silent(WorkflowSettings {
        check_unique_on_edit: true,
    })
}

pub fn script(lines: &[&str]) -> ScriptedConsole {
    ScriptedConsole::new(lines.iter().copied())
}

/// Formatted log output shared between a test and its subscriber.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// A context whose events are formatted into this buffer.
    pub fn ctx(&self) -> Context {
        let buffer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || buffer.clone())
            .finish();
        Context::new(WorkflowSettings::default(), Dispatch::new(subscriber))
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.contents().contains(needle)
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
