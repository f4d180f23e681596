//! Shared error types for the application
//!
//! The scoring engine itself never fails: every partial input is modelled as
//! an absent score. Errors only arise at the edges, when reading population
//! snapshots and configuration or when the caller names a focal listing that
//! is not in the snapshot.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cohortmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system errors with path context
    #[error("I/O error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed population snapshot or report serialization failure
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The requested focal listing is not part of the snapshot
    #[error("Listing {0} not found in population")]
    FocalNotFound(i64),
}

impl Error {
    /// Create an I/O error with path context
    pub fn io_with_path(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
