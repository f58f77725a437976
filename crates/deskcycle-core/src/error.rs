//! Core error types for deskcycle-core.
//!
//! Nothing in this crate is fatal: malformed persisted blobs fall back to
//! defaults inside the store, and a failed write leaves the in-memory state
//! authoritative until the next successful rewrite.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for deskcycle-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Persistence errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Blob-store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the backing database
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Store is locked by another writer
    #[error("Store is locked")]
    Locked,

    /// Read or write failed
    #[error("Store query failed: {0}")]
    QueryFailed(String),

    /// Blob could not be encoded for writing
    #[error("Failed to encode blob: {0}")]
    Encode(#[from] serde_json::Error),

    /// Filesystem-level failure resolving the data directory
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validation errors, rejected at the boundary before reaching the engine.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    StoreError::Locked
                } else {
                    StoreError::QueryFailed(err.to_string())
                }
            }
            _ => StoreError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
