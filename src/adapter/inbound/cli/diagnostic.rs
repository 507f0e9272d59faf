//! Miette-based diagnostics for configuration files.
//!
//! A configuration file that does not parse, or names a value the
//! validator rejects, is reported with the file content and a label on the
//! offending spot.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::error::ConfigError;

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(northwind::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// The configuration file.
    #[source_code]
    pub src: NamedSource<String>,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: Option<SourceSpan>,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    /// Describe `err`, raised while loading `text` from `path`.
    ///
    /// `None` for errors that have nothing to point at in the file, such as
    /// an unreadable file.
    #[must_use]
    pub fn locate(path: &Path, text: &str, err: &ConfigError) -> Option<Self> {
        let (message, span, help) = match err {
            ConfigError::Parse(parse) => (
                parse.message().to_string(),
                parse.span().map(|r| SourceSpan::from(r.start..r.end)),
                None,
            ),
            ConfigError::InvalidValue { field, reason } => (
                format!("invalid value for {field}"),
                key_span(text, field),
                Some(reason.clone()),
            ),
            ConfigError::MissingField { field } => (
                format!("missing required field: {field}"),
                key_span(text, field),
                Some(format!("set `{field}` to a non-empty value")),
            ),
            ConfigError::ReadFile(_) => return None,
        };
        Some(Self {
            message,
            src: NamedSource::new(path.display().to_string(), text.to_string()),
            span,
            help,
        })
    }
}

/// Span of the line assigning the last segment of `field` (`logging.level`
/// looks for `level = ...`).
fn key_span(text: &str, field: &str) -> Option<SourceSpan> {
    let key = field.rsplit('.').next().unwrap_or(field);
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key) {
            if rest.trim_start().starts_with('=') {
                let start = offset + (line.len() - trimmed.len());
                let len = trimmed.trim_end().len();
                return Some((start, len).into());
            }
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::settings::Config;

    fn config_error(text: &str) -> ConfigError {
        match Config::parse_toml(text).unwrap_err() {
            crate::error::Error::Config(err) => err,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_errors_point_into_the_file() {
        let text = "database = \"x.db\"\n[logging\n";
        let err = config_error(text);

        let diagnostic = ConfigDiagnostic::locate(Path::new("config.toml"), text, &err).unwrap();

        let span = diagnostic.span.unwrap();
        assert!(span.offset() >= "database = \"x.db\"\n".len());
    }

    #[test]
    fn invalid_values_point_at_their_key() {
        let text = "[logging]\n  level = \"loud\"\n";
        let err = config_error(text);

        let diagnostic = ConfigDiagnostic::locate(Path::new("config.toml"), text, &err).unwrap();

        let span = diagnostic.span.unwrap();
        assert_eq!(span.offset(), "[logging]\n  ".len());
        assert_eq!(span.len(), "level = \"loud\"".len());
        assert!(diagnostic.help.unwrap().contains("warn"));
    }

    #[test]
    fn read_errors_have_no_location() {
        let err = ConfigError::ReadFile(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(ConfigDiagnostic::locate(Path::new("config.toml"), "", &err).is_none());
    }
}
