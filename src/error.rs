//! Error types.
//!
//! One top-level [`Error`] wraps a focused enum per concern so callers can
//! match on the failure they care about (the CLI uses this to pick hints).

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[source] serde_yaml::Error),

    #[error("invalid variable name '{key}': {reason}")]
    InvalidKey { key: String, reason: &'static str },
}

/// Failures of an individual lookup that are not transport errors.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("invalid export: {0}")]
    ExportNotFound(String),

    #[error("stack not found: {0}")]
    StackNotFound(String),

    #[error("secret {secret_id} is not valid JSON: {source}")]
    SecretNotJson {
        secret_id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("field '{field}' not found in secret {secret_id}")]
    SecretFieldNotFound { secret_id: String, field: String },
}

/// Failures talking to a backend service.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("{service} request failed: {message}")]
    Request {
        service: &'static str,
        message: String,
    },

    #[error("{service} returned no {what}")]
    EmptyResponse {
        service: &'static str,
        what: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
