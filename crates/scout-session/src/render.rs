//! Render feed handed to the presentation layer after every transition.

use scout_document::DocumentKind;
use scout_index::ScoredResult;
use serde::Serialize;

use crate::{
    recent::RecentQueries,
    state::{Phase, SessionState},
};

/// One row of the result list, as a renderer needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedResult {
    /// Document id.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Secondary line.
    pub subtitle: String,
    /// Record category.
    pub kind: DocumentKind,
    /// Labels.
    pub tags: Vec<String>,
    /// Relevance score.
    pub score: u32,
    /// Route opened when the row is confirmed.
    pub target: String,
}

impl From<&ScoredResult> for RenderedResult {
    fn from(hit: &ScoredResult) -> Self {
        let doc = &hit.document;
        Self {
            id: doc.id,
            title: doc.title.clone(),
            subtitle: doc.subtitle.clone(),
            kind: doc.kind,
            tags: doc.tags.clone(),
            score: hit.score,
            target: doc.target.clone(),
        }
    }
}

/// Snapshot of everything a renderer draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderFeed {
    /// Whether the palette is visible.
    pub is_open: bool,
    /// Coarse state, for branching on empty / no-match / results.
    pub state: Phase,
    /// Query text as typed.
    pub query: String,
    /// Ranked rows.
    pub results: Vec<RenderedResult>,
    /// Highlighted row, if any.
    pub selected_index: Option<usize>,
    /// Recent queries, offered only while the query is empty.
    pub recent_queries: Vec<String>,
}

impl RenderFeed {
    /// Builds the feed for a state.
    pub fn new(state: &SessionState, recent: &RecentQueries) -> Self {
        let phase = state.phase();
        let recent_queries = if phase == Phase::OpenEmpty {
            recent.entries().to_vec()
        } else {
            Vec::new()
        };

        Self {
            is_open: state.is_open(),
            state: phase,
            query: state.query().to_string(),
            results: state.results().iter().map(RenderedResult::from).collect(),
            selected_index: state.selected_index(),
            recent_queries,
        }
    }

    /// Guidance text for states without results.
    pub fn message(&self) -> Option<String> {
        match self.state {
            Phase::OpenNoMatches => Some(format!("No results for \"{}\"", self.query)),
            Phase::OpenEmpty if self.recent_queries.is_empty() => {
                Some("Type to search clients, projects, agents, and pages".to_string())
            }
            Phase::OpenEmpty => Some("Recent searches".to_string()),
            Phase::Closed | Phase::OpenWithResults => None,
        }
    }
}
