//! Term-to-position inverted index.
//!
//! Posting lists hold store positions rather than document ids so that a hit resolves
//! to its document with a single slice index. Lists are built in store order and are
//! therefore strictly ascending without any sorting.

use std::collections::{BTreeSet, HashMap};

use scout_document::Document;

use crate::tokenizer::tokenize;

/// Read-only mapping from term to the positions of the documents that contain it.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    /// Term -> ascending, duplicate-free store positions.
    postings: HashMap<String, Vec<usize>>,
    /// Number of documents the index was built from.
    document_count: usize,
}

impl InvertedIndex {
    /// Builds the index over documents in store order.
    ///
    /// Each document contributes the terms of its title, subtitle, and tags. A term that
    /// occurs several times in one document is recorded once for it.
    pub fn build(documents: &[Document]) -> Self {
        let mut postings: HashMap<String, Vec<usize>> = HashMap::new();

        for (position, document) in documents.iter().enumerate() {
            for term in tokenize(&document.searchable_text()) {
                let list = postings.entry(term).or_default();
                if list.last() != Some(&position) {
                    list.push(position);
                }
            }
        }

        let index = Self {
            postings,
            document_count: documents.len(),
        };
        tracing::debug!(
            documents = index.document_count,
            terms = index.term_count(),
            postings = index.posting_count(),
            "built inverted index"
        );
        index
    }

    /// Returns the union of the posting lists for `terms`.
    ///
    /// A document matching any single term is a candidate. Terms absent from the index
    /// contribute nothing; an empty term list yields an empty set. The set iterates in
    /// store order.
    pub fn lookup<S: AsRef<str>>(&self, terms: &[S]) -> BTreeSet<usize> {
        terms
            .iter()
            .filter_map(|term| self.postings.get(term.as_ref()))
            .flatten()
            .copied()
            .collect()
    }

    /// Returns the union of the posting lists of every indexed term that contains one of
    /// `fragments`.
    ///
    /// This is the partial-word counterpart of [`lookup`](Self::lookup): `"scor"` reaches
    /// documents indexed under `"scorer"` and `"scoring"`. Every term contains itself, so
    /// the result is always a superset of `lookup` over the same input. The vocabulary is
    /// scanned once per call.
    pub fn lookup_containing<S: AsRef<str>>(&self, fragments: &[S]) -> BTreeSet<usize> {
        if fragments.is_empty() {
            return BTreeSet::new();
        }
        self.postings
            .iter()
            .filter(|(term, _)| {
                fragments
                    .iter()
                    .any(|fragment| term.contains(fragment.as_ref()))
            })
            .flat_map(|(_, positions)| positions.iter().copied())
            .collect()
    }

    /// The posting list for one term, if the term is indexed.
    pub fn postings(&self, term: &str) -> Option<&[usize]> {
        self.postings.get(term).map(Vec::as_slice)
    }

    /// Whether a term is indexed.
    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Total entries across all posting lists.
    pub fn posting_count(&self) -> usize {
        self.postings.values().map(Vec::len).sum()
    }

    /// Number of documents the index was built from.
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// Indexed terms in lexicographic order.
    pub fn terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.postings.keys().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }
}
