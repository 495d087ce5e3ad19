//! Error types for catalog loading and document store construction.

use std::{io, path::PathBuf};

use thiserror::Error;
use toml::de;

/// Errors that can occur when loading catalogs or building a document store.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to read a catalog file.
    #[error("failed to read catalog {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse a TOML catalog.
    #[error("failed to parse catalog {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// Failed to parse a JSON catalog.
    #[error("failed to parse catalog {path}: {source}")]
    ParseJson {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying JSON parse error.
        source: serde_json::Error,
    },

    /// The catalog file extension is not one we know how to read.
    #[error("unsupported catalog format: {path} (expected .toml or .json)")]
    UnsupportedFormat {
        /// Path with the unrecognized extension.
        path: PathBuf,
    },

    /// Two documents share the same id.
    #[error("duplicate document id {id}: \"{first}\" and \"{second}\"")]
    DuplicateId {
        /// The repeated id.
        id: u64,
        /// Title of the document that claimed the id first.
        first: String,
        /// Title of the document that repeated it.
        second: String,
    },

    /// A document has an empty or whitespace-only title.
    #[error("document {id} has an empty title")]
    EmptyTitle {
        /// Id of the offending document.
        id: u64,
    },
}
