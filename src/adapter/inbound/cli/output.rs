//! CLI output formatting for the scripted commands.
//!
//! Human-readable output uses colored symbols and indented fields. In JSON
//! mode every item becomes one `{"type": ..., "payload": ...}` line, so
//! output can be piped through `jq`. Quiet mode suppresses everything but
//! warnings, errors and JSON.
//!
//! Settings live on the [`Output`] value handed to each handler rather than
//! in process state. Colors follow `owo-colors`' stream detection, which
//! `--color` overrides.

use std::fmt::Display;
use std::io::{self, Write};

use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use serde_json::json;
use tabled::{Table, Tabled};

use crate::error::Result;

/// Output settings from the global CLI flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

/// A formatter bound to one writer.
pub struct Output<W> {
    out: W,
    config: OutputConfig,
}

impl Output<io::Stdout> {
    /// Output to standard out.
    #[must_use]
    pub fn stdout(config: OutputConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> Output<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Self { out, config }
    }

    #[must_use]
    pub fn is_json(&self) -> bool {
        self.config.json
    }

    /// Recover the writer, for tests that capture output.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn suppressed(&self) -> bool {
        !self.config.json && self.config.quiet
    }

    fn emit_json_line(&mut self, kind: &str, payload: serde_json::Value) -> Result<()> {
        writeln!(
            self.out,
            "{}",
            json!({
                "type": kind,
                "payload": payload,
            })
        )?;
        Ok(())
    }

    /// Print a section header.
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.config.json {
            return self.emit_json_line("section", json!({ "title": title }));
        }
        if self.suppressed() {
            return Ok(());
        }
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            title.if_supports_color(Stream::Stdout, |t| t.bold())
        )?;
        Ok(())
    }

    /// Print a labeled value.
    pub fn field(&mut self, label: &str, value: impl Display) -> Result<()> {
        let value = value.to_string();
        if self.config.json {
            return self.emit_json_line("field", json!({ "label": label, "value": value }));
        }
        if self.suppressed() {
            return Ok(());
        }
        writeln!(
            self.out,
            "  {:<18} {}",
            label.if_supports_color(Stream::Stdout, |t| t.dimmed()),
            value
        )?;
        Ok(())
    }

    /// Print a success line.
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.config.json {
            return self.emit_json_line("success", json!({ "message": message }));
        }
        if self.suppressed() {
            return Ok(());
        }
        writeln!(
            self.out,
            "  {} {}",
            "✓".if_supports_color(Stream::Stdout, |t| t.green()),
            message
        )?;
        Ok(())
    }

    /// Print a warning line. Shown even in quiet mode.
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.config.json {
            return self.emit_json_line("warning", json!({ "message": message }));
        }
        writeln!(
            self.out,
            "  {} {}",
            "⚠".if_supports_color(Stream::Stdout, |t| t.yellow()),
            message
        )?;
        Ok(())
    }

    /// Print a note/hint.
    pub fn note(&mut self, message: &str) -> Result<()> {
        if self.config.json {
            return self.emit_json_line("note", json!({ "message": message }));
        }
        if self.suppressed() {
            return Ok(());
        }
        writeln!(
            self.out,
            "  {}",
            message.if_supports_color(Stream::Stdout, |t| t.dimmed())
        )?;
        Ok(())
    }

    /// Print multiple lines of content, each indented.
    pub fn lines(&mut self, content: &str) -> Result<()> {
        if self.config.json {
            return self.emit_json_line("lines", json!({ "content": content }));
        }
        if self.suppressed() {
            return Ok(());
        }
        for line in content.lines() {
            writeln!(self.out, "  {line}")?;
        }
        Ok(())
    }

    /// Emit one record as a `kind` JSON line. Nothing in text mode, where
    /// handlers print the record field by field.
    pub fn record<T: Serialize>(&mut self, kind: &str, value: &T) -> Result<()> {
        if !self.config.json {
            return Ok(());
        }
        let payload = serde_json::to_value(value)?;
        self.emit_json_line(kind, payload)
    }

    /// Print rows as a table, or one `kind` JSON line per row.
    pub fn table<T: Tabled + Serialize>(&mut self, kind: &str, rows: &[T]) -> Result<()> {
        if self.config.json {
            for row in rows {
                let payload = serde_json::to_value(row)?;
                self.emit_json_line(kind, payload)?;
            }
            return Ok(());
        }
        if self.suppressed() || rows.is_empty() {
            return Ok(());
        }
        let table = Table::new(rows).to_string();
        self.lines(&table)
    }
}

/// Print an error line to standard error.
pub fn error(json: bool, message: &str) {
    if json {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }
    eprintln!(
        "  {} {}",
        "×".if_supports_color(Stream::Stderr, |t| t.red()),
        message
    );
}
