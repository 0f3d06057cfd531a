//! Error types for vimdoc2adoc.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::Encoding;

/// Main error type for conversion and batch operations.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("'{encoding}' codec can't decode {path} at byte {offset}")]
    Decode {
        path: PathBuf,
        encoding: Encoding,
        offset: usize,
    },

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("Invalid argument template '{template}': {message}")]
    Template { template: String, message: String },

    #[error("{failed} of {total} files failed to convert")]
    Batch { failed: usize, total: usize },

    #[error("Failed to run {command}: {source}")]
    Command {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for vimdoc2adoc operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
