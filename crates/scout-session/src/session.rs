//! The palette session: owns the state and wires it to its collaborators.
//!
//! [`SearchSession`] is the only holder of mutable palette state. Every command goes
//! through [`reduce`]; the session then forwards navigation events to a
//! [`NavigationSink`] and records the confirmed query in the recent list.

use std::mem;

use scout_index::{QueryEngine, Scorer, WeightedScorer};

use crate::{
    recent::{RECENT_NAMESPACE, RecentQueries, RecentStore},
    render::RenderFeed,
    state::{Command, NavigationEvent, SessionState, reduce},
};

/// Receives navigation events when a result is confirmed.
pub trait NavigationSink {
    /// Handles one confirmed result.
    fn navigate(&mut self, event: &NavigationEvent);
}

impl<F: FnMut(&NavigationEvent)> NavigationSink for F {
    fn navigate(&mut self, event: &NavigationEvent) {
        self(event);
    }
}

/// One palette instance over a shared corpus.
pub struct SearchSession<S = WeightedScorer> {
    /// Query engine over the shared corpus.
    engine: QueryEngine<S>,
    /// Current palette state.
    state: SessionState,
    /// Recently confirmed queries.
    recent: RecentQueries,
    /// Whether confirmed queries are recorded.
    record_recent: bool,
    /// Persistence for `recent`, if any.
    store: Option<Box<dyn RecentStore>>,
    /// Receiver of navigation events, if any.
    navigator: Option<Box<dyn NavigationSink>>,
}

impl<S: Scorer> SearchSession<S> {
    /// Creates a closed session with an in-memory recent list of default capacity.
    pub fn new(engine: QueryEngine<S>) -> Self {
        Self {
            engine,
            state: SessionState::Closed,
            recent: RecentQueries::default(),
            record_recent: true,
            store: None,
            navigator: None,
        }
    }

    /// Persists recent queries through `store`, loading what it already holds.
    ///
    /// A store that cannot be read starts the session with an empty list.
    #[must_use]
    pub fn with_recent_store(mut self, store: Box<dyn RecentStore>, capacity: usize) -> Self {
        let entries = store.load(RECENT_NAMESPACE).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring unreadable recent queries");
            Vec::new()
        });
        self.recent = RecentQueries::from_entries(entries, capacity);
        self.store = Some(store);
        self
    }

    /// Enables or disables recording of confirmed queries.
    #[must_use]
    pub fn with_recording(mut self, enabled: bool) -> Self {
        self.record_recent = enabled;
        self
    }

    /// Sends navigation events to `sink`.
    #[must_use]
    pub fn with_navigator(mut self, sink: Box<dyn NavigationSink>) -> Self {
        self.navigator = Some(sink);
        self
    }

    /// Applies a command, returning the navigation event if one was emitted.
    pub fn dispatch(&mut self, command: Command) -> Option<NavigationEvent> {
        let from = self.state.phase();
        let transition = reduce(mem::take(&mut self.state), command, &self.engine);
        self.state = transition.state;
        tracing::trace!(?from, to = ?self.state.phase(), "palette transition");

        let event = transition.navigation?;
        self.remember(&event.query);
        if let Some(navigator) = self.navigator.as_mut() {
            navigator.navigate(&event);
        }
        Some(event)
    }

    /// Shows the palette.
    pub fn open(&mut self) {
        self.dispatch(Command::Open);
    }

    /// Replaces the query text and re-ranks.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.dispatch(Command::SetQuery(text.into()));
    }

    /// Highlights the next result.
    pub fn navigate_next(&mut self) {
        self.dispatch(Command::NavigateNext);
    }

    /// Highlights the previous result.
    pub fn navigate_previous(&mut self) {
        self.dispatch(Command::NavigatePrevious);
    }

    /// Activates the highlighted result.
    pub fn confirm(&mut self) -> Option<NavigationEvent> {
        self.dispatch(Command::Confirm)
    }

    /// Activates the result at `index`.
    pub fn confirm_at(&mut self, index: usize) -> Option<NavigationEvent> {
        self.dispatch(Command::ConfirmAt(index))
    }

    /// Hides the palette.
    pub fn close(&mut self) {
        self.dispatch(Command::Close);
    }

    /// Current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Render snapshot of the current state.
    pub fn render(&self) -> RenderFeed {
        RenderFeed::new(&self.state, &self.recent)
    }

    /// Recently confirmed queries.
    pub fn recent(&self) -> &RecentQueries {
        &self.recent
    }

    /// The query engine.
    pub fn engine(&self) -> &QueryEngine<S> {
        &self.engine
    }

    /// Records a confirmed query and persists the list; storage failures are logged.
    fn remember(&mut self, query: &str) {
        if !self.record_recent || !self.recent.push(query) {
            return;
        }
        if let Some(store) = self.store.as_mut()
            && let Err(e) = store.save(RECENT_NAMESPACE, self.recent.entries())
        {
            tracing::warn!(error = %e, "failed to persist recent queries");
        }
    }
}
