//! State of the search screen.

use crate::client::OrderRecord;
use crate::filters::{summarize, Filters, SummaryEntry};
use crate::ui::mvi::UiState;

/// Shown when the user submits blank input.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search query";

/// Everything the view needs to render one search session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    /// Text currently in the input box. Cleared after a successful search.
    pub query: String,
    /// Trimmed text of the most recent submission.
    pub last_search_query: String,
    pub results: Vec<OrderRecord>,
    /// Filters the service inferred for the last successful search.
    pub filters: Option<Filters>,
    pub warnings: Vec<String>,
    pub follow_up: Option<String>,
    pub error: Option<String>,
    /// A request is in flight.
    pub loading: bool,
    /// Submission counter; replies tagged with an older value are stale.
    pub generation: u64,
}

impl UiState for SearchState {}

/// Coarse status for headers and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Searching,
    Failed,
    Done { count: usize },
}

impl SearchState {
    /// Display summary of the current filters.
    pub fn summary(&self) -> Vec<SummaryEntry> {
        summarize(self.filters.as_ref())
    }

    pub fn phase(&self) -> SearchPhase {
        if self.loading {
            SearchPhase::Searching
        } else if self.error.is_some() {
            SearchPhase::Failed
        } else if self.generation == 0 {
            SearchPhase::Idle
        } else {
            SearchPhase::Done {
                count: self.results.len(),
            }
        }
    }

    pub fn has_searched(&self) -> bool {
        self.generation > 0
    }
}
