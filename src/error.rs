//! Error types for catalog loading, configuration, and injected capabilities
//!
//! Filtering, scoring, and translation are total and never return these.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-level error
#[derive(Debug, Error)]
pub enum Error {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("capability error: {0}")]
    Capability(#[from] CapabilityError),

    #[error("assistant error: {0}")]
    Assistant(#[from] AssistantError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading or validating plan records
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog row: {0}")]
    Csv(#[from] csv::Error),

    #[error("plan {id}: {reason}")]
    InvalidPlan { id: u32, reason: String },

    #[error("plan {id}: unknown category '{value}'")]
    UnknownCategory { id: u32, value: String },

    #[error("duplicate plan id {0}")]
    DuplicateId(u32),
}

/// Errors raised when parsing wire names (sort keys, categories, screens)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown sort key '{0}'")]
    SortKey(String),

    #[error("unknown category '{0}'")]
    Category(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no string table registered for default locale '{0}'")]
    MissingDefaultLocale(String),
}

/// Failures reported by share/export collaborators
#[derive(Debug, Error)]
pub enum CapabilityError {
    #[error("share target unavailable")]
    ShareUnavailable,

    #[error("export failed for {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistantError {
    #[error("a deferred task is already in flight")]
    Busy,

    #[error("deferred task was cancelled")]
    Cancelled,
}
