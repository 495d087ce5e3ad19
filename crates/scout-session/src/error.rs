//! Error types for the scout-session crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised by recent-query storage.
#[derive(Debug, Error)]
pub enum RecentError {
    /// Failed to read the store file.
    #[error("failed to read recent queries from {path}: {source}")]
    Read {
        /// Path to the store file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write the store file.
    #[error("failed to write recent queries to {path}: {source}")]
    Write {
        /// Path to the store file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The store file is not valid JSON of the expected shape.
    #[error("corrupt recent query store {path}: {source}")]
    Corrupt {
        /// Path to the store file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// No platform data directory could be determined.
    #[error("could not determine a data directory for recent queries")]
    NoDataDirectory,
}
