//! Palette selection state machine.
//!
//! The session is a plain value, [`SessionState`], advanced by the pure function
//! [`reduce`]. Each variant carries only the data that is meaningful in that state, so a
//! selection can never point outside the result list and a closed palette can never hold
//! a query.
//!
//! Commands that make no sense in the current state (navigating an empty list,
//! confirming with nothing highlighted, typing into a closed palette) leave the state
//! untouched rather than failing.

use scout_document::{Document, DocumentKind};
use scout_index::{QueryEngine, ScoredResult, Scorer};
use serde::Serialize;

/// Input commands accepted by the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the palette.
    Open,
    /// Replace the query text.
    SetQuery(String),
    /// Highlight the next result, wrapping to the first.
    NavigateNext,
    /// Highlight the previous result, wrapping to the last.
    NavigatePrevious,
    /// Activate the highlighted result.
    Confirm,
    /// Activate a result by index, as a pointer click would.
    ConfirmAt(usize),
    /// Hide the palette and discard the query.
    Close,
}

/// Coarse palette state, as reported to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Palette hidden.
    Closed,
    /// Open with an empty (or blank) query.
    OpenEmpty,
    /// Open with a query that matched nothing.
    OpenNoMatches,
    /// Open with at least one result.
    OpenWithResults,
}

/// Full palette state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Palette hidden; initial state.
    #[default]
    Closed,
    /// Open, query empty or whitespace only.
    OpenEmpty {
        /// The text as typed.
        query: String,
    },
    /// Open, query non-blank, no results.
    OpenNoMatches {
        /// The text as typed.
        query: String,
    },
    /// Open with ranked results.
    OpenWithResults {
        /// The text as typed.
        query: String,
        /// Ranked results; never empty.
        results: Vec<ScoredResult>,
        /// Highlighted result, if any; always a valid index into `results`.
        selected: Option<usize>,
    },
}

impl SessionState {
    /// The coarse phase.
    pub fn phase(&self) -> Phase {
        match self {
            Self::Closed => Phase::Closed,
            Self::OpenEmpty { .. } => Phase::OpenEmpty,
            Self::OpenNoMatches { .. } => Phase::OpenNoMatches,
            Self::OpenWithResults { .. } => Phase::OpenWithResults,
        }
    }

    /// Whether the palette is visible.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Current query text; empty when closed.
    pub fn query(&self) -> &str {
        match self {
            Self::Closed => "",
            Self::OpenEmpty { query }
            | Self::OpenNoMatches { query }
            | Self::OpenWithResults { query, .. } => query,
        }
    }

    /// Current results; empty unless in [`Phase::OpenWithResults`].
    pub fn results(&self) -> &[ScoredResult] {
        match self {
            Self::OpenWithResults { results, .. } => results,
            _ => &[],
        }
    }

    /// Highlighted result index.
    pub fn selected_index(&self) -> Option<usize> {
        match self {
            Self::OpenWithResults { selected, .. } => *selected,
            _ => None,
        }
    }

    /// The highlighted result.
    pub fn selected(&self) -> Option<&ScoredResult> {
        self.selected_index().and_then(|i| self.results().get(i))
    }
}

/// Emitted when a result is confirmed; tells the host where to go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEvent {
    /// Id of the confirmed document.
    pub document_id: u64,
    /// Kind of the confirmed document.
    pub kind: DocumentKind,
    /// Title of the confirmed document.
    pub title: String,
    /// Opaque navigation target.
    pub target: String,
    /// Query text that produced the result.
    pub query: String,
}

impl NavigationEvent {
    /// Builds the event for a confirmed document.
    fn new(document: &Document, query: String) -> Self {
        Self {
            document_id: document.id,
            kind: document.kind,
            title: document.title.clone(),
            target: document.target.clone(),
            query,
        }
    }
}

/// Result of applying one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The new state.
    pub state: SessionState,
    /// Navigation to perform, if a result was confirmed.
    pub navigation: Option<NavigationEvent>,
}

impl Transition {
    /// A transition that emits nothing.
    fn to(state: SessionState) -> Self {
        Self {
            state,
            navigation: None,
        }
    }
}

/// Applies a command to a state.
///
/// The engine is only read, so equal inputs always produce equal transitions.
pub fn reduce<S: Scorer>(
    state: SessionState,
    command: Command,
    engine: &QueryEngine<S>,
) -> Transition {
    match command {
        Command::Open => match state {
            SessionState::Closed => Transition::to(SessionState::OpenEmpty {
                query: String::new(),
            }),
            open => Transition::to(open),
        },
        Command::Close => Transition::to(SessionState::Closed),
        Command::SetQuery(text) => match state {
            SessionState::Closed => Transition::to(SessionState::Closed),
            _ => Transition::to(search(text, engine)),
        },
        Command::NavigateNext => Transition::to(navigate(state, Step::Next)),
        Command::NavigatePrevious => Transition::to(navigate(state, Step::Previous)),
        Command::Confirm => {
            let index = state.selected_index();
            confirm(state, index)
        }
        Command::ConfirmAt(index) => confirm(state, Some(index)),
    }
}

/// Runs the query and picks the matching open state; the selection always resets.
fn search<S: Scorer>(query: String, engine: &QueryEngine<S>) -> SessionState {
    if query.trim().is_empty() {
        return SessionState::OpenEmpty { query };
    }

    let results = engine.run(&query);
    if results.is_empty() {
        SessionState::OpenNoMatches { query }
    } else {
        SessionState::OpenWithResults {
            query,
            results,
            selected: None,
        }
    }
}

/// Direction of a navigation step.
#[derive(Clone, Copy)]
enum Step {
    /// Towards the end of the list.
    Next,
    /// Towards the start of the list.
    Previous,
}

/// Moves the highlight with wrap-around; a no-op outside `OpenWithResults`.
fn navigate(state: SessionState, step: Step) -> SessionState {
    match state {
        SessionState::OpenWithResults {
            query,
            results,
            selected,
        } => {
            let Some(last) = results.len().checked_sub(1) else {
                return SessionState::OpenWithResults {
                    query,
                    results,
                    selected,
                };
            };
            let next = match (step, selected) {
                (Step::Next, Some(i)) if i < last => i + 1,
                (Step::Next, _) => 0,
                (Step::Previous, Some(i)) if i > 0 => i - 1,
                (Step::Previous, _) => last,
            };
            SessionState::OpenWithResults {
                query,
                results,
                selected: Some(next),
            }
        }
        other => other,
    }
}

/// Confirms the result at `index`, closing the palette; a no-op if there is no such
/// result.
fn confirm(state: SessionState, index: Option<usize>) -> Transition {
    let event = match (&state, index) {
        (SessionState::OpenWithResults { query, results, .. }, Some(i)) => results
            .get(i)
            .map(|hit| NavigationEvent::new(&hit.document, query.clone())),
        _ => None,
    };

    match event {
        Some(event) => Transition {
            state: SessionState::Closed,
            navigation: Some(event),
        },
        None => Transition::to(state),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use scout_document::DocumentStore;
    use scout_index::Corpus;

    use super::*;

    fn engine() -> QueryEngine {
        let store = DocumentStore::new(vec![
            Document::new(1, DocumentKind::Agent, "Lead Scorer"),
            Document::new(2, DocumentKind::Page, "Lead Scoring Report"),
            Document::new(3, DocumentKind::Client, "Lead Generation Partners"),
            Document::new(4, DocumentKind::Page, "Settings").with_target("/settings"),
        ])
        .unwrap();
        QueryEngine::new(Arc::new(Corpus::new(store)))
    }

    fn apply(engine: &QueryEngine, state: SessionState, commands: &[Command]) -> SessionState {
        commands
            .iter()
            .cloned()
            .fold(state, |state, command| reduce(state, command, engine).state)
    }

    fn with_results(engine: &QueryEngine) -> SessionState {
        apply(engine, SessionState::Closed, &[
            Command::Open,
            Command::SetQuery("lead".into()),
        ])
    }

    #[test]
    fn test_open_from_closed() {
        let t = reduce(SessionState::Closed, Command::Open, &engine());
        assert_eq!(t.state, SessionState::OpenEmpty {
            query: String::new()
        });
        assert!(t.navigation.is_none());
    }

    #[test]
    fn test_open_while_open_keeps_query() {
        let engine = engine();
        let state = with_results(&engine);
        let t = reduce(state.clone(), Command::Open, &engine);
        assert_eq!(t.state, state);
    }

    #[test]
    fn test_set_query_states() {
        let engine = engine();
        let open = apply(&engine, SessionState::Closed, &[Command::Open]);

        let empty = apply(&engine, open.clone(), &[Command::SetQuery(String::new())]);
        assert_eq!(empty.phase(), Phase::OpenEmpty);
        assert!(empty.results().is_empty());

        let blank = apply(&engine, open.clone(), &[Command::SetQuery("   ".into())]);
        assert_eq!(blank.phase(), Phase::OpenEmpty);
        assert_eq!(blank.query(), "   ");

        let none = apply(&engine, open.clone(), &[Command::SetQuery("zzzznotfound".into())]);
        assert_eq!(none.phase(), Phase::OpenNoMatches);
        assert!(none.results().is_empty());

        let some = apply(&engine, open, &[Command::SetQuery("lead".into())]);
        assert_eq!(some.phase(), Phase::OpenWithResults);
        assert_eq!(some.results().len(), 3);
        assert_eq!(some.selected_index(), None);
    }

    #[test]
    fn test_short_query_has_no_matches() {
        let engine = engine();
        let state = apply(&engine, SessionState::Closed, &[
            Command::Open,
            Command::SetQuery("ma".into()),
        ]);
        assert_eq!(state.phase(), Phase::OpenNoMatches);
    }

    #[test]
    fn test_set_query_while_closed_is_ignored() {
        let engine = engine();
        let state = apply(&engine, SessionState::Closed, &[Command::SetQuery("lead".into())]);
        assert_eq!(state, SessionState::Closed);
    }

    #[test]
    fn test_query_change_resets_selection() {
        let engine = engine();
        let state = apply(&engine, with_results(&engine), &[
            Command::NavigateNext,
            Command::NavigateNext,
            Command::SetQuery("lead scor".into()),
        ]);
        assert_eq!(state.selected_index(), None);
    }

    #[test]
    fn test_navigate_next_wraps() {
        let engine = engine();
        let mut state = with_results(&engine);
        let mut seen = Vec::new();
        for _ in 0..4 {
            state = reduce(state, Command::NavigateNext, &engine).state;
            seen.push(state.selected_index().unwrap());
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_navigate_previous_wraps() {
        let engine = engine();
        let from_none = apply(&engine, with_results(&engine), &[Command::NavigatePrevious]);
        assert_eq!(from_none.selected_index(), Some(2));

        let from_first = apply(&engine, with_results(&engine), &[
            Command::NavigateNext,
            Command::NavigatePrevious,
        ]);
        assert_eq!(from_first.selected_index(), Some(2));

        let step_back = apply(&engine, from_first, &[Command::NavigatePrevious]);
        assert_eq!(step_back.selected_index(), Some(1));
    }

    #[test]
    fn test_navigation_ignored_without_results() {
        let engine = engine();
        let states = [
            SessionState::Closed,
            apply(&engine, SessionState::Closed, &[Command::Open]),
            apply(&engine, SessionState::Closed, &[
                Command::Open,
                Command::SetQuery("zzzznotfound".into()),
            ]),
        ];
        for state in states {
            for command in [
                Command::NavigateNext,
                Command::NavigatePrevious,
                Command::Confirm,
                Command::ConfirmAt(0),
            ] {
                let t = reduce(state.clone(), command, &engine);
                assert_eq!(t.state, state);
                assert!(t.navigation.is_none());
            }
        }
    }

    #[test]
    fn test_confirm_without_selection_is_ignored() {
        let engine = engine();
        let state = with_results(&engine);
        let t = reduce(state.clone(), Command::Confirm, &engine);
        assert_eq!(t.state, state);
        assert!(t.navigation.is_none());
    }

    #[test]
    fn test_confirm_emits_target_and_closes() {
        let engine = engine();
        let state = apply(&engine, SessionState::Closed, &[
            Command::Open,
            Command::SetQuery("settings".into()),
            Command::NavigateNext,
        ]);
        let t = reduce(state, Command::Confirm, &engine);
        assert_eq!(t.state, SessionState::Closed);
        let event = t.navigation.unwrap();
        assert_eq!(event.target, "/settings");
        assert_eq!(event.document_id, 4);
        assert_eq!(event.query, "settings");
    }

    #[test]
    fn test_confirm_at_pointer_index() {
        let engine = engine();
        let t = reduce(with_results(&engine), Command::ConfirmAt(1), &engine);
        let event = t.navigation.unwrap();
        assert_eq!(event.title, "Lead Scoring Report");
        assert_eq!(t.state, SessionState::Closed);
    }

    #[test]
    fn test_confirm_at_out_of_range_is_ignored() {
        let engine = engine();
        let state = with_results(&engine);
        let t = reduce(state.clone(), Command::ConfirmAt(9), &engine);
        assert_eq!(t.state, state);
        assert!(t.navigation.is_none());
    }

    #[test]
    fn test_close_clears_everything() {
        let engine = engine();
        let state = apply(&engine, with_results(&engine), &[
            Command::NavigateNext,
            Command::Close,
        ]);
        assert_eq!(state, SessionState::Closed);
        assert_eq!(state.query(), "");
        assert!(state.results().is_empty());
        assert_eq!(state.selected_index(), None);

        let reopened = apply(&engine, state, &[Command::Open]);
        assert_eq!(reopened.query(), "");
    }
}
