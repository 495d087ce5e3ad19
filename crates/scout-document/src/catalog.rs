//! Catalog file loading.
//!
//! A catalog is a file of document records supplied by the application's data layer.
//! Two formats are accepted, chosen by file extension:
//!
//! - `.toml`: an array of `[[document]]` tables
//! - `.json`: either a bare array of records or an object with a `documents` array
//!
//! Only `id`, `kind`, and `title` are required. Missing `subtitle` and `tags` default to
//! empty, and a missing `target` falls back to the kind's conventional route.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{Document, DocumentError, DocumentKind, DocumentStore};

/// A document record as it appears in a catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    /// Document identifier.
    pub id: u64,
    /// Record category.
    pub kind: DocumentKind,
    /// Display title.
    pub title: String,
    /// Secondary display line.
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Free-form labels.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Navigation target.
    #[serde(default)]
    pub target: Option<String>,
}

impl From<RawDocument> for Document {
    fn from(raw: RawDocument) -> Self {
        let target = raw
            .target
            .unwrap_or_else(|| raw.kind.default_target(raw.id));
        Self {
            id: raw.id,
            kind: raw.kind,
            title: raw.title,
            subtitle: raw.subtitle.unwrap_or_default(),
            tags: raw.tags.unwrap_or_default(),
            target,
        }
    }
}

/// TOML catalog layout.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TomlCatalog {
    /// The `[[document]]` tables.
    document: Vec<RawDocument>,
}

/// JSON catalog layouts.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    /// A bare array of records.
    List(Vec<RawDocument>),
    /// An object wrapping the records.
    Wrapped {
        /// The wrapped records.
        documents: Vec<RawDocument>,
    },
}

/// Parses a TOML catalog.
///
/// The `path` parameter is used for error reporting.
pub fn parse_toml_catalog(contents: &str, path: &Path) -> Result<Vec<Document>, DocumentError> {
    let catalog: TomlCatalog =
        toml::from_str(contents).map_err(|source| DocumentError::ParseToml {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(catalog.document.into_iter().map(Document::from).collect())
}

/// Parses a JSON catalog.
///
/// The `path` parameter is used for error reporting.
pub fn parse_json_catalog(contents: &str, path: &Path) -> Result<Vec<Document>, DocumentError> {
    let catalog: JsonCatalog =
        serde_json::from_str(contents).map_err(|source| DocumentError::ParseJson {
            path: path.to_path_buf(),
            source,
        })?;
    let raw = match catalog {
        JsonCatalog::List(documents) | JsonCatalog::Wrapped { documents } => documents,
    };
    Ok(raw.into_iter().map(Document::from).collect())
}

/// Reads a single catalog file, dispatching on its extension.
pub fn load_catalog(path: &Path) -> Result<Vec<Document>, DocumentError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let parse: fn(&str, &Path) -> Result<Vec<Document>, DocumentError> =
        match extension.as_deref() {
            Some("toml") => parse_toml_catalog,
            Some("json") => parse_json_catalog,
            _ => {
                return Err(DocumentError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

    let contents = fs::read_to_string(path).map_err(|source| DocumentError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let documents = parse(&contents, path)?;
    tracing::debug!(path = %path.display(), documents = documents.len(), "loaded catalog");
    Ok(documents)
}

/// Loads several catalogs, in order, into one validated store.
///
/// Document order in the store follows catalog order, then record order within each
/// catalog; this order is the ranking tie-break.
pub fn load_catalogs<P: AsRef<Path>>(paths: &[P]) -> Result<DocumentStore, DocumentError> {
    let mut documents = Vec::new();
    for path in paths {
        documents.extend(load_catalog(path.as_ref())?);
    }
    DocumentStore::new(documents)
}
