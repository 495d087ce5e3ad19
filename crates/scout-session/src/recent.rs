//! Recently confirmed queries.
//!
//! [`RecentQueries`] is the in-memory list: most recent first, duplicate-free, bounded.
//! Persistence goes through the [`RecentStore`] key-value seam, keyed by
//! [`RECENT_NAMESPACE`], so hosts can plug in whatever storage they have.

use std::{
    collections::{BTreeMap, HashMap},
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;

use crate::RecentError;

/// Storage key under which recent queries are persisted.
pub const RECENT_NAMESPACE: &str = "scout.recent-queries";

/// Default number of recent queries kept.
pub const DEFAULT_RECENT_CAPACITY: usize = 5;

/// File name of the on-disk store inside the data directory.
const STORE_FILENAME: &str = "recent.json";

/// Most-recent-first list of confirmed queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentQueries {
    /// Entries, newest first.
    entries: Vec<String>,
    /// Maximum number of entries.
    capacity: usize,
}

impl Default for RecentQueries {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_CAPACITY)
    }
}

impl RecentQueries {
    /// Creates an empty list.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Creates a list from stored entries, re-applying deduplication and the bound.
    pub fn from_entries(entries: Vec<String>, capacity: usize) -> Self {
        let mut recent = Self::new(capacity);
        for entry in entries.into_iter().rev() {
            recent.push(entry);
        }
        recent
    }

    /// Records a query as the most recent one.
    ///
    /// Blank queries are ignored. An existing identical entry moves to the front. Returns
    /// whether the list changed.
    pub fn push(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query.trim().is_empty() || self.capacity == 0 {
            return false;
        }
        if self.entries.first() == Some(&query) {
            return false;
        }

        self.entries.retain(|entry| *entry != query);
        self.entries.insert(0, query);
        self.entries.truncate(self.capacity);
        true
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Key-value persistence for recent queries.
pub trait RecentStore {
    /// Loads the entries saved under `namespace`; a missing key yields an empty list.
    fn load(&self, namespace: &str) -> Result<Vec<String>, RecentError>;

    /// Replaces the entries saved under `namespace`.
    fn save(&mut self, namespace: &str, entries: &[String]) -> Result<(), RecentError>;
}

/// Process-local store, for tests and hosts without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecentStore {
    /// Namespace -> entries.
    values: HashMap<String, Vec<String>>,
}

impl RecentStore for MemoryRecentStore {
    fn load(&self, namespace: &str) -> Result<Vec<String>, RecentError> {
        Ok(self.values.get(namespace).cloned().unwrap_or_default())
    }

    fn save(&mut self, namespace: &str, entries: &[String]) -> Result<(), RecentError> {
        self.values.insert(namespace.to_string(), entries.to_vec());
        Ok(())
    }
}

/// JSON file store: one object mapping namespace to entry list.
#[derive(Debug, Clone)]
pub struct FileRecentStore {
    /// Location of the JSON file.
    path: PathBuf,
}

impl FileRecentStore {
    /// Uses an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses `recent.json` in the platform data directory for scout.
    pub fn in_data_dir() -> Result<Self, RecentError> {
        default_store_path().map(Self::new)
    }

    /// Location of the JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole file; a missing file is an empty store.
    fn read_all(&self) -> Result<BTreeMap<String, Vec<String>>, RecentError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(RecentError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&contents).map_err(|source| RecentError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }
}

impl RecentStore for FileRecentStore {
    fn load(&self, namespace: &str) -> Result<Vec<String>, RecentError> {
        Ok(self.read_all()?.remove(namespace).unwrap_or_default())
    }

    fn save(&mut self, namespace: &str, entries: &[String]) -> Result<(), RecentError> {
        let mut all = self.read_all()?;
        all.insert(namespace.to_string(), entries.to_vec());

        let write_err = |source: io::Error| RecentError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let json = serde_json::to_string_pretty(&all).map_err(|source| RecentError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(write_err)
    }
}

/// Default location of the recent query file.
pub fn default_store_path() -> Result<PathBuf, RecentError> {
    ProjectDirs::from("", "", "scout")
        .map(|dirs| dirs.data_dir().join(STORE_FILENAME))
        .ok_or(RecentError::NoDataDirectory)
}
