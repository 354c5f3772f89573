//! Search session: runs one query against a [`SearchService`] and drives
//! the search state through its transitions.
//!
//! Observers subscribe to a `watch` channel and re-render whenever the
//! state changes.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::client::{SearchRequest, SearchResponse, SearchService};
use crate::filters::sanitize;
use crate::ui::mvi::apply;
use crate::ui::search::{SearchIntent, SearchReducer, SearchState, EMPTY_QUERY_MESSAGE};

/// Shared handle to a search session. Cheap to clone.
#[derive(Clone)]
pub struct SearchSession {
    state: Arc<watch::Sender<SearchState>>,
    service: Arc<dyn SearchService>,
    sanitize_filters: bool,
}

impl SearchSession {
    pub fn new(service: Arc<dyn SearchService>) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        Self {
            state: Arc::new(state),
            service,
            sanitize_filters: true,
        }
    }

    /// Enable or disable client-side filter sanitizing.
    pub fn with_sanitize_filters(mut self, enabled: bool) -> Self {
        self.sanitize_filters = enabled;
        self
    }

    /// Current state.
    pub fn snapshot(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Apply one intent. Observers are only woken if the state changed.
    pub fn dispatch(&self, intent: SearchIntent) {
        self.state
            .send_if_modified(|state| apply::<SearchReducer>(state, intent));
    }

    /// Replace the input text.
    pub fn set_query(&self, text: impl Into<String>) {
        self.dispatch(SearchIntent::QueryChanged { text: text.into() });
    }

    /// Validate and record a submission of `raw`.
    ///
    /// Returns the generation and trimmed query to send, or `None` if the
    /// input was blank (the error is already in the state).
    pub fn begin(&self, raw: &str) -> Option<(u64, String)> {
        let query = raw.trim();
        if query.is_empty() {
            self.dispatch(SearchIntent::Rejected {
                message: EMPTY_QUERY_MESSAGE.to_string(),
            });
            return None;
        }

        self.dispatch(SearchIntent::Submitted {
            query: query.to_string(),
        });
        let generation = self.state.borrow().generation;
        Some((generation, query.to_string()))
    }

    /// Submit `raw` and wait until the session settles.
    ///
    /// Returns the state after the reply has been applied.
    pub async fn run(&self, raw: &str) -> SearchState {
        match self.begin(raw) {
            Some((generation, query)) => self.execute(generation, query).await,
            None => self.snapshot(),
        }
    }

    /// Send a submission recorded by [`begin`](Self::begin) and apply the reply.
    pub async fn execute(&self, generation: u64, query: String) -> SearchState {
        debug!(generation, query = %query, "search started");
        let request = SearchRequest::new(query);
        match self.service.search(&request).await {
            Ok(response) => {
                let response = self.reconcile(response, &request.query);
                debug!(generation, results = response.results.len(), "search succeeded");
                self.dispatch(SearchIntent::Succeeded {
                    generation,
                    response,
                });
            }
            Err(err) => {
                warn!(generation, status = ?err.status(), error = %err, "search failed");
                self.dispatch(SearchIntent::Failed {
                    generation,
                    message: err.display_message(),
                });
            }
        }
        self.dispatch(SearchIntent::Settled { generation });

        self.snapshot()
    }

    /// Sanitize the inferred filters and fold the report into the payload.
    fn reconcile(&self, mut response: SearchResponse, query: &str) -> SearchResponse {
        if !self.sanitize_filters {
            return response;
        }
        let Some(filters) = response.filters.as_mut() else {
            return response;
        };

        let report = sanitize(filters, query);
        if report.is_clean() {
            return response;
        }
        debug!(
            warnings = report.warnings.len(),
            assumptions = report.assumptions.len(),
            "filters sanitized"
        );
        for warning in report.warnings {
            if !response.warnings.contains(&warning) {
                response.warnings.push(warning);
            }
        }
        if response.follow_up.is_none() && !report.assumptions.is_empty() {
            response.follow_up = Some(report.assumptions.join(" "));
        }
        response
    }
}
