//! Query execution: tokenize, look up, score, rank, truncate.

use std::{collections::BTreeSet, sync::Arc};

use scout_document::{Document, DocumentStore};
use serde::Serialize;

use crate::{
    inverted::InvertedIndex,
    scorer::{Scorer, WeightedScorer},
    tokenizer::tokenize_unique,
};

/// A document store together with the index built from it.
///
/// The index is always built from, and only ever consulted against, the store it sits
/// beside. Both are immutable, so a corpus can be shared across sessions behind an
/// [`Arc`].
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// The documents.
    store: DocumentStore,
    /// Index over `store`.
    index: InvertedIndex,
}

impl Corpus {
    /// Builds the index over `store` and pairs them.
    pub fn new(store: DocumentStore) -> Self {
        let index = InvertedIndex::build(store.documents());
        Self { store, index }
    }

    /// The documents.
    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// The index.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }
}

/// One ranked hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredResult {
    /// Store position of the document (the ranking tie-break).
    pub position: usize,
    /// The matched document.
    pub document: Document,
    /// Relevance score; higher is better.
    pub score: u32,
}

/// Runs ranked queries against a shared [`Corpus`].
#[derive(Debug, Clone)]
pub struct QueryEngine<S = WeightedScorer> {
    /// Documents and index.
    corpus: Arc<Corpus>,
    /// Relevance function.
    scorer: S,
    /// Maximum results to return; `None` is unlimited.
    limit: Option<usize>,
}

impl QueryEngine<WeightedScorer> {
    /// Creates an engine with the default scorer and no result limit.
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self::with_scorer(corpus, WeightedScorer::default())
    }
}

impl<S: Scorer> QueryEngine<S> {
    /// Creates an engine with a custom scorer and no result limit.
    pub fn with_scorer(corpus: Arc<Corpus>, scorer: S) -> Self {
        Self {
            corpus,
            scorer,
            limit: None,
        }
    }

    /// Sets the maximum number of results returned by [`run`](Self::run).
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// The shared corpus.
    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    /// The scorer.
    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// The result limit.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Store positions of every document with an indexed term containing a query term.
    ///
    /// Matching inside terms means any document whose title contains the query keeps its
    /// place among the candidates, including partial words such as `"corp"` against
    /// `"Acme Corporation"`. Queries whose tokens are all shorter than the minimum term
    /// length produce no terms and therefore no candidates.
    pub fn candidates(&self, raw_query: &str) -> BTreeSet<usize> {
        let terms = tokenize_unique(raw_query);
        self.corpus.index.lookup_containing(&terms)
    }

    /// Runs a query and returns hits ranked by score.
    ///
    /// Empty or whitespace-only queries return nothing. Candidates are scored against
    /// the raw query, then sorted by descending score; the sort is stable, so equal
    /// scores keep store order and identical queries produce identical lists.
    pub fn run(&self, raw_query: &str) -> Vec<ScoredResult> {
        if raw_query.trim().is_empty() {
            return Vec::new();
        }

        let candidates = self.candidates(raw_query);
        let candidate_count = candidates.len();

        let mut results: Vec<ScoredResult> = candidates
            .into_iter()
            .filter_map(|position| {
                let document = self.corpus.store.get(position)?;
                Some(ScoredResult {
                    position,
                    score: self.scorer.score(document, raw_query),
                    document: document.clone(),
                })
            })
            .collect();

        results.sort_by(|a, b| b.score.cmp(&a.score));

        if let Some(limit) = self.limit {
            results.truncate(limit);
        }

        tracing::debug!(
            query = raw_query,
            candidates = candidate_count,
            results = results.len(),
            "ran query"
        );
        results
    }
}
