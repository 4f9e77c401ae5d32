//! Error types.
//!
//! Each layer gets its own enum; `Error` wraps them so callers can use `?`
//! across the whole pipeline.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration errors, raised before any store call.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingVariables(Vec<String>),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: String, reason: String },
}

/// Errors raised by the secret store client.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("no data found at '{0}'")]
    NotFound(String),

    #[error("secret {path}!{key} not found, available keys in {path}: {}", .available.join(","))]
    KeyNotFound {
        path: String,
        key: String,
        available: Vec<String>,
    },

    #[error("unexpected status {status} for '{path}'")]
    Status { path: String, status: u16 },

    #[error("malformed response for '{path}': {reason}")]
    Malformed { path: String, reason: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl StoreError {
    /// Whether the error means "nothing lives here" rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
