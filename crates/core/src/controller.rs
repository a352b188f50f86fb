//! Search controller: the idle → loading → success|error state machine.
//!
//! The transitions are plain methods on [`SearchState`] so a UI can wrap them
//! around its own executor; [`SearchController`] composes them over any
//! [`SearchBackend`].

use async_trait::async_trait;
use std::fmt::Display;
use tracing::{debug, info, warn};

use crate::filter::CategoryFilter;
use crate::messages;
use crate::types::SearchResult;

/// The remote side of a search: anything that can answer a query and a liveness probe.
#[async_trait(?Send)]
pub trait SearchBackend {
    type Error: Display;

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, Self::Error>;

    /// True iff the backend is reachable and healthy. Never fails.
    async fn health_check(&self) -> bool;
}

/// Observable search state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub results: Vec<SearchResult>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub has_searched: bool,
    /// Bumped on every submission; settles from older submissions are dropped.
    pub(crate) generation: u64,
}

/// Handle for one accepted submission, consumed by [`SearchState::finish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    query: String,
    filter: CategoryFilter,
}

impl Ticket {
    pub fn query(&self) -> &str {
        &self.query
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a submission.
    ///
    /// Returns `None` when the query is blank: the validation error is set,
    /// results are cleared, and the loading flag is already released. No
    /// backend call may follow in that case, and any earlier ticket is stale.
    pub fn begin(&mut self, query: &str, filter: CategoryFilter) -> Option<Ticket> {
        self.is_loading = true;
        self.error = None;
        self.has_searched = true;
        // Any submission, valid or not, supersedes the one in flight.
        self.generation += 1;

        if query.trim().is_empty() {
            self.error = Some(messages::EMPTY_QUERY.to_string());
            self.results.clear();
            self.is_loading = false;
            return None;
        }

        Some(Ticket { generation: self.generation, query: query.to_string(), filter })
    }

    /// Settle a submission with the backend's outcome.
    ///
    /// Returns false (and leaves the state untouched) when a newer submission
    /// has started since `ticket` was issued.
    pub fn finish<E: Display>(&mut self, ticket: Ticket, outcome: Result<Vec<SearchResult>, E>) -> bool {
        if ticket.generation != self.generation {
            debug!(query = ticket.query.as_str(), "Dropping superseded search result");
            return false;
        }

        match outcome {
            Ok(raw) => {
                let total = raw.len();
                let results = ticket.filter.apply(raw);
                debug!(total, kept = results.len(), filter = %ticket.filter, "Search settled");
                if results.is_empty() {
                    self.error = Some(messages::no_results_for(&ticket.query, ticket.filter));
                }
                self.results = results;
            }
            Err(e) => {
                let message = e.to_string();
                warn!(error = message.as_str(), "Search failed");
                self.error = Some(if message.trim().is_empty() {
                    messages::BACKEND_UNREACHABLE.to_string()
                } else {
                    message
                });
                self.results.clear();
            }
        }
        self.is_loading = false;
        true
    }
}

/// Owns a backend and the state it drives.
pub struct SearchController<B> {
    backend: B,
    state: SearchState,
    api_status: Option<bool>,
}

impl<B: SearchBackend> SearchController<B> {
    pub fn new(backend: B) -> Self {
        Self { backend, state: SearchState::new(), api_status: None }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// `None` until the first health check settles.
    pub fn api_status(&self) -> Option<bool> {
        self.api_status
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run one search end to end. Loading is always released on return.
    pub async fn submit(&mut self, query: &str, filter: CategoryFilter) -> &SearchState {
        let Some(ticket) = self.state.begin(query, filter) else {
            return &self.state;
        };
        let outcome = self.backend.search(ticket.query()).await;
        self.state.finish(ticket, outcome);
        &self.state
    }

    /// Probe the backend and record the outcome.
    pub async fn check_health(&mut self) -> bool {
        let healthy = self.backend.health_check().await;
        info!(healthy, "Backend health check");
        self.api_status = Some(healthy);
        healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::present::View;
    use crate::types::{Artist, EntityKind, Genre};
    use std::cell::Cell;

    struct FakeBackend {
        response: Result<Vec<SearchResult>, String>,
        healthy: bool,
        calls: Cell<usize>,
    }

    impl FakeBackend {
        fn ok(results: Vec<SearchResult>) -> Self {
            Self { response: Ok(results), healthy: true, calls: Cell::new(0) }
        }

        fn failing(message: &str) -> Self {
            Self { response: Err(message.to_string()), healthy: false, calls: Cell::new(0) }
        }
    }

    #[async_trait(?Send)]
    impl SearchBackend for FakeBackend {
        type Error = String;

        async fn search(&self, _query: &str) -> Result<Vec<SearchResult>, String> {
            self.calls.set(self.calls.get() + 1);
            self.response.clone()
        }

        async fn health_check(&self) -> bool {
            self.healthy
        }
    }

    fn artist(uri: &str) -> SearchResult {
        SearchResult::Artist(Artist {
            uri: uri.into(),
            name: "Art Blakey".into(),
            description: None,
            nationality: Some("Estadounidense".into()),
            birth_year: Some(1919),
            active_years: None,
            trajectory: None,
            discography: None,
            awards: None,
            genre: Some("Jazz".into()),
        })
    }

    fn genre(uri: &str) -> SearchResult {
        SearchResult::Genre(Genre { uri: uri.into(), name: "Jazz".into(), description: None })
    }

    #[test]
    fn loading_is_false_before_first_search() {
        let state = SearchState::new();
        assert!(!state.is_loading);
        assert!(!state.has_searched);
    }

    #[tokio::test]
    async fn blank_query_never_reaches_backend() {
        let mut controller = SearchController::new(FakeBackend::ok(vec![artist("a")]));
        for query in ["", "   ", "\t\n"] {
            let state = controller.submit(query, CategoryFilter::All).await;
            assert_eq!(state.error.as_deref(), Some("Por favor ingresa un término de búsqueda"));
            assert!(state.results.is_empty());
            assert!(!state.is_loading);
            assert!(state.has_searched);
            assert!(View::select(state).cards().is_empty());
        }
        assert_eq!(controller.backend().calls.get(), 0);
    }

    #[tokio::test]
    async fn genre_filter_keeps_only_genre_items() {
        let backend = FakeBackend::ok(vec![artist("urn:artist"), genre("urn:genre")]);
        let mut controller = SearchController::new(backend);
        let state = controller.submit("jazz", CategoryFilter::Only(EntityKind::Genre)).await;

        assert!(state.error.is_none());
        assert_eq!(state.results.len(), 1);
        assert_eq!(state.results[0].uri(), "urn:genre");
        assert!(!state.is_loading);
        let cards = View::select(state).cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].type_label, "Género");
    }

    #[tokio::test]
    async fn all_filter_renders_one_card_per_result() {
        let raw = vec![artist("a1"), genre("g1"), artist("a2")];
        let mut controller = SearchController::new(FakeBackend::ok(raw));
        let state = controller.submit("blakey", CategoryFilter::All).await;

        let cards = View::select(state).cards();
        assert_eq!(cards.len(), 3);
        let mut keys: Vec<_> = cards.iter().map(|c| c.key.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 3);
    }

    #[tokio::test]
    async fn filtered_to_zero_reports_category() {
        let mut controller = SearchController::new(FakeBackend::ok(vec![artist("a")]));
        let state = controller.submit("jazz", CategoryFilter::Only(EntityKind::Song)).await;

        assert!(state.results.is_empty());
        assert_eq!(
            state.error.as_deref(),
            Some("No se encontraron resultados para \"jazz\" en la categoría song")
        );
        // The category message wins over the generic empty placeholder.
        assert!(matches!(View::select(state), View::Error(_)));
    }

    #[tokio::test]
    async fn empty_unfiltered_response_names_general_category() {
        let mut controller = SearchController::new(FakeBackend::ok(vec![]));
        let state = controller.submit("zzz", CategoryFilter::All).await;
        assert_eq!(
            state.error.as_deref(),
            Some("No se encontraron resultados para \"zzz\" en la categoría general")
        );
    }

    #[tokio::test]
    async fn backend_error_is_surfaced_and_results_cleared() {
        let mut controller = SearchController::new(FakeBackend::ok(vec![artist("a")]));
        controller.submit("jazz", CategoryFilter::All).await;
        assert_eq!(controller.state().results.len(), 1);

        controller.backend = FakeBackend::failing("request failed: connection refused");
        let state = controller.submit("jazz", CategoryFilter::All).await;
        assert_eq!(state.error.as_deref(), Some("request failed: connection refused"));
        assert!(state.results.is_empty());
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn blank_error_message_falls_back_to_generic() {
        let mut controller = SearchController::new(FakeBackend::failing(""));
        let state = controller.submit("jazz", CategoryFilter::All).await;
        assert_eq!(state.error.as_deref(), Some(messages::BACKEND_UNREACHABLE));
    }

    #[tokio::test]
    async fn failed_health_check_only_touches_api_status() {
        let mut controller = SearchController::new(FakeBackend::failing("down"));
        assert_eq!(controller.api_status(), None);
        assert!(!controller.check_health().await);
        assert_eq!(controller.api_status(), Some(false));
        assert_eq!(controller.state(), &SearchState::new());
    }

    #[test]
    fn superseded_submission_is_dropped() {
        let mut state = SearchState::new();
        let first = state.begin("jazz", CategoryFilter::All).unwrap();
        let second = state.begin("rock", CategoryFilter::All).unwrap();

        assert!(!state.finish(first, Ok::<_, String>(vec![artist("stale")])));
        assert!(state.is_loading);
        assert!(state.results.is_empty());

        assert!(state.finish(second, Ok::<_, String>(vec![genre("fresh")])));
        assert!(!state.is_loading);
        assert_eq!(state.results[0].uri(), "fresh");
    }

    #[test]
    fn blank_submission_supersedes_search_in_flight() {
        let mut state = SearchState::new();
        let pending = state.begin("jazz", CategoryFilter::All).unwrap();
        assert!(state.begin("   ", CategoryFilter::All).is_none());

        assert!(!state.finish(pending, Ok::<_, String>(vec![genre("stale")])));
        assert_eq!(state.error.as_deref(), Some(messages::EMPTY_QUERY));
        assert!(state.results.is_empty());
        assert!(!state.is_loading);
    }

    #[test]
    fn stale_failure_does_not_replace_validation_message() {
        let mut state = SearchState::new();
        let pending = state.begin("jazz", CategoryFilter::All).unwrap();
        assert!(state.begin("", CategoryFilter::All).is_none());

        assert!(!state.finish(pending, Err::<Vec<SearchResult>, _>("timed out")));
        assert_eq!(state.error.as_deref(), Some(messages::EMPTY_QUERY));
    }

    #[test]
    fn new_submission_clears_previous_error() {
        let mut state = SearchState::new();
        assert!(state.begin("  ", CategoryFilter::All).is_none());
        assert!(state.error.is_some());

        let ticket = state.begin("jazz", CategoryFilter::All).unwrap();
        assert!(state.error.is_none());
        assert!(state.is_loading);
        assert_eq!(ticket.query(), "jazz");
    }
}
