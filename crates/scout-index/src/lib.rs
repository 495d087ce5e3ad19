//! In-memory search core for scout.
//!
//! This crate turns a [`DocumentStore`](scout_document::DocumentStore) into a ranked,
//! queryable corpus:
//! - [`tokenize`] normalizes text into terms (lower-case, whitespace split, length >= 3)
//! - [`InvertedIndex`] maps terms to store positions, built once
//! - [`Scorer`] / [`WeightedScorer`] assign additive relevance scores
//! - [`QueryEngine`] runs lookup, scoring, stable ranking, and truncation
//!
//! Everything here is synchronous and total: no operation fails.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use scout_document::{Document, DocumentKind, DocumentStore};
//! use scout_index::{Corpus, QueryEngine};
//!
//! let store = DocumentStore::new(vec![
//!     Document::new(1, DocumentKind::Agent, "Lead Scorer"),
//!     Document::new(2, DocumentKind::Page, "Lead Scoring Report"),
//! ])
//! .unwrap();
//!
//! let engine = QueryEngine::new(Arc::new(Corpus::new(store)));
//! let results = engine.run("lead scorer");
//! assert_eq!(results[0].document.title, "Lead Scorer");
//! ```

#![warn(missing_docs)]

mod engine;
mod inverted;
mod scorer;
mod tokenizer;

pub use engine::{Corpus, QueryEngine, ScoredResult};
pub use inverted::InvertedIndex;
pub use scorer::{KindBonus, ScoreBreakdown, ScoreWeights, Scorer, TitleMatch, WeightedScorer};
pub use tokenizer::{MIN_TERM_LENGTH, tokenize, tokenize_unique};
