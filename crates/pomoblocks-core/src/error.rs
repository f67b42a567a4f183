//! Core error types for pomoblocks-core.
//!
//! Every fallible operation in the library returns [`CoreError`] (or one of
//! its component errors) through the [`Result`] alias.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pomoblocks-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Export-related errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Rejected user input
    #[error("Invalid value for '{field}': {message}")]
    InvalidInput { field: String, message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,

    /// A stored value exists but does not decode
    #[error("Stored value under '{key}' is unreadable: {message}")]
    Unreadable { key: String, message: String },

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable at {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Export-specific errors.
#[derive(Error, Debug)]
pub enum ExportError {
    /// CSV writer failed
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    /// Unknown hand-off target name
    #[error("unknown export target '{0}' (expected obsidian, bear or drafts)")]
    UnknownTarget(String),

    /// The platform opener could not launch the URL
    #[error("Failed to open {url}: {source}")]
    OpenFailed {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing the downloaded file failed
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _msg) => {
                if e.code == rusqlite::ErrorCode::DatabaseLocked {
                    StorageError::Locked
                } else {
                    StorageError::QueryFailed(err.to_string())
                }
            }
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for CoreError {
    fn from(err: rusqlite::Error) -> Self {
        CoreError::Storage(err.into())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
