//! Command-palette session for scout.
//!
//! The palette is a small state machine: [`reduce`] maps a [`SessionState`] and a
//! [`Command`] to the next state and an optional [`NavigationEvent`]. [`SearchSession`]
//! owns one state, forwards navigation to a [`NavigationSink`], and keeps the list of
//! [`RecentQueries`] behind a [`RecentStore`].
//!
//! ```
//! use std::sync::Arc;
//!
//! use scout_document::{Document, DocumentKind, DocumentStore};
//! use scout_index::{Corpus, QueryEngine};
//! use scout_session::{Phase, SearchSession};
//!
//! let store = DocumentStore::new(vec![Document::new(1, DocumentKind::Client, "Acme Corp")])?;
//! let mut session = SearchSession::new(QueryEngine::new(Arc::new(Corpus::new(store))));
//!
//! session.open();
//! session.set_query("acme");
//! assert_eq!(session.render().state, Phase::OpenWithResults);
//!
//! let event = session.confirm_at(0).expect("a result was confirmed");
//! assert_eq!(event.target, "/clients/1");
//! # Ok::<(), scout_document::DocumentError>(())
//! ```

mod error;
mod recent;
mod render;
mod session;
mod state;

pub use error::RecentError;
pub use recent::{
    DEFAULT_RECENT_CAPACITY, FileRecentStore, MemoryRecentStore, RECENT_NAMESPACE, RecentQueries,
    RecentStore, default_store_path,
};
pub use render::{RenderFeed, RenderedResult};
pub use session::{NavigationSink, SearchSession};
pub use state::{Command, NavigationEvent, Phase, SessionState, Transition, reduce};
