//! Document model and catalog loading for scout.
//!
//! This crate holds the records the command palette searches over:
//! - [`Document`] and [`DocumentKind`], the searchable record shape
//! - [`DocumentStore`], the validated flat collection the index is built from
//! - Catalog loading from TOML (`[[document]]` tables) and JSON files
//!
//! # Example
//!
//! ```
//! use scout_document::{Document, DocumentKind, DocumentStore};
//!
//! let store = DocumentStore::new(vec![
//!     Document::new(1, DocumentKind::Client, "Acme Corp"),
//!     Document::new(2, DocumentKind::Page, "Reports").with_target("/reports"),
//! ])
//! .unwrap();
//!
//! assert_eq!(store.len(), 2);
//! assert_eq!(store.get(0).unwrap().target, "/clients/1");
//! ```

#![warn(missing_docs)]

mod catalog;
mod error;

use std::{collections::HashMap, fmt, str::FromStr};

pub use catalog::{
    RawDocument, load_catalog, load_catalogs, parse_json_catalog, parse_toml_catalog,
};
pub use error::DocumentError;
use serde::{Deserialize, Serialize};

/// The category of business record a document represents.
///
/// Order matters: it is the declaration order used for display grouping, and each kind
/// carries a distinct ranking bonus in the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// A client account.
    Client,
    /// A consulting project.
    Project,
    /// An automation agent.
    Agent,
    /// A static application page.
    Page,
}

impl DocumentKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 4] = [Self::Client, Self::Project, Self::Agent, Self::Page];

    /// Lowercase singular name, as used in catalogs and config.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Project => "project",
            Self::Agent => "agent",
            Self::Page => "page",
        }
    }

    /// Route prefix used when a document does not declare its own target.
    fn route_prefix(self) -> &'static str {
        match self {
            Self::Client => "clients",
            Self::Project => "projects",
            Self::Agent => "agents",
            Self::Page => "pages",
        }
    }

    /// Conventional navigation target for a document of this kind.
    pub fn default_target(self, id: u64) -> String {
        format!("/{}/{id}", self.route_prefix())
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "client" => Ok(Self::Client),
            "project" => Ok(Self::Project),
            "agent" => Ok(Self::Agent),
            "page" => Ok(Self::Page),
            other => Err(format!(
                "unknown document kind '{other}' (expected client, project, agent, or page)"
            )),
        }
    }
}

/// A searchable record supplied by the application's data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Identifier, unique within a [`DocumentStore`].
    pub id: u64,
    /// Record category.
    pub kind: DocumentKind,
    /// Display title; never empty inside a store.
    pub title: String,
    /// Secondary display line (may be empty).
    pub subtitle: String,
    /// Free-form labels, in catalog order.
    pub tags: Vec<String>,
    /// Opaque navigation target, usually an application route.
    pub target: String,
}

impl Document {
    /// Creates a document with an empty subtitle, no tags, and the kind's default target.
    pub fn new(id: u64, kind: DocumentKind, title: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
            subtitle: String::new(),
            tags: Vec::new(),
            target: kind.default_target(id),
        }
    }

    /// Sets the subtitle.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the navigation target.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// The text the index tokenizes: title, subtitle, and tags joined by single spaces.
    ///
    /// Empty parts are skipped so that missing fields contribute nothing.
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(2 + self.tags.len());
        parts.push(&self.title);
        if !self.subtitle.is_empty() {
            parts.push(&self.subtitle);
        }
        parts.extend(self.tags.iter().map(String::as_str));
        parts.join(" ")
    }
}

/// The validated, ordered collection of documents that an index is built from.
///
/// Positions (indices into the backing sequence) are stable for the lifetime of the store
/// and serve as the document handles used by the index and ranking tie-breaks.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    /// Documents in supply order.
    documents: Vec<Document>,
}

impl DocumentStore {
    /// Builds a store, enforcing unique ids and non-empty titles.
    pub fn new(documents: Vec<Document>) -> Result<Self, DocumentError> {
        let mut seen: HashMap<u64, usize> = HashMap::with_capacity(documents.len());
        for (position, doc) in documents.iter().enumerate() {
            if doc.title.trim().is_empty() {
                return Err(DocumentError::EmptyTitle { id: doc.id });
            }
            if let Some(&first) = seen.get(&doc.id) {
                return Err(DocumentError::DuplicateId {
                    id: doc.id,
                    first: documents[first].title.clone(),
                    second: doc.title.clone(),
                });
            }
            seen.insert(doc.id, position);
        }

        tracing::debug!(documents = documents.len(), "document store ready");
        Ok(Self { documents })
    }

    /// Returns the document at a store position.
    pub fn get(&self, position: usize) -> Option<&Document> {
        self.documents.get(position)
    }

    /// Finds the store position of a document id.
    pub fn position_of(&self, id: u64) -> Option<usize> {
        self.documents.iter().position(|doc| doc.id == id)
    }

    /// All documents, in store order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Iterates over documents in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of documents of each kind, in [`DocumentKind::ALL`] order.
    pub fn kind_counts(&self) -> [(DocumentKind, usize); 4] {
        DocumentKind::ALL.map(|kind| {
            let count = self.documents.iter().filter(|d| d.kind == kind).count();
            (kind, count)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_defaults() {
        let doc = Document::new(7, DocumentKind::Agent, "Lead Scorer");
        assert_eq!(doc.subtitle, "");
        assert!(doc.tags.is_empty());
        assert_eq!(doc.target, "/agents/7");
    }

    #[test]
    fn test_searchable_text_joins_fields() {
        let doc = Document::new(1, DocumentKind::Client, "Acme Corp")
            .with_subtitle("Manufacturing")
            .with_tags(["enterprise", "emea"]);
        assert_eq!(
            doc.searchable_text(),
            "Acme Corp Manufacturing enterprise emea"
        );
    }

    #[test]
    fn test_searchable_text_skips_missing_fields() {
        let doc = Document::new(1, DocumentKind::Page, "Settings");
        assert_eq!(doc.searchable_text(), "Settings");
    }

    #[test]
    fn test_kind_parse_and_display() {
        assert_eq!("Client".parse::<DocumentKind>().unwrap(), DocumentKind::Client);
        assert_eq!("page".parse::<DocumentKind>().unwrap(), DocumentKind::Page);
        assert!("invoice".parse::<DocumentKind>().is_err());
        assert_eq!(DocumentKind::Project.to_string(), "project");
    }

    #[test]
    fn test_store_rejects_duplicate_ids() {
        let err = DocumentStore::new(vec![
            Document::new(1, DocumentKind::Client, "Acme"),
            Document::new(1, DocumentKind::Project, "Acme Rollout"),
        ])
        .unwrap_err();
        assert!(matches!(err, DocumentError::DuplicateId { id: 1, .. }));
    }

    #[test]
    fn test_store_rejects_blank_title() {
        let err =
            DocumentStore::new(vec![Document::new(3, DocumentKind::Page, "   ")]).unwrap_err();
        assert!(matches!(err, DocumentError::EmptyTitle { id: 3 }));
    }

    #[test]
    fn test_store_lookup() {
        let store = DocumentStore::new(vec![
            Document::new(10, DocumentKind::Client, "Acme"),
            Document::new(20, DocumentKind::Agent, "Lead Scorer"),
        ])
        .unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.position_of(20), Some(1));
        assert_eq!(store.get(1).unwrap().title, "Lead Scorer");
        assert!(store.get(2).is_none());
    }

    #[test]
    fn test_kind_counts() {
        let store = DocumentStore::new(vec![
            Document::new(1, DocumentKind::Client, "Acme"),
            Document::new(2, DocumentKind::Client, "Globex"),
            Document::new(3, DocumentKind::Page, "Reports"),
        ])
        .unwrap();
        let counts = store.kind_counts();
        assert_eq!(counts[0], (DocumentKind::Client, 2));
        assert_eq!(counts[1], (DocumentKind::Project, 0));
        assert_eq!(counts[3], (DocumentKind::Page, 1));
    }
}
