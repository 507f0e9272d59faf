use thiserror::Error;

use crate::domain::EntityKind;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Refusals reported by a record store.
///
/// These are the store-level outcomes the workflows surface as a
/// persistence failure. Anything else the backend raises arrives as
/// [`Error::Database`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity} {id} does not exist")]
    Missing { entity: EntityKind, id: i32 },

    #[error("{entity} name '{name}' already exists")]
    DuplicateName { entity: EntityKind, name: String },

    #[error("{entity} {id} is still referenced by {dependents} product(s)")]
    InUse {
        entity: EntityKind,
        id: i32,
        dependents: usize,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("parse error: {0}")]
    Parse(String),

    /// The operator's input stream reached end of file.
    #[error("input closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, Error>;
