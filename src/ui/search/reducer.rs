//! Reducer for search session state transitions.

use crate::ui::mvi::Reducer;

use super::intent::SearchIntent;
use super::state::SearchState;

/// Search session state machine.
///
/// Replies carry the generation they were issued under; anything from an
/// older generation is dropped so a slow reply never overwrites a newer one.
pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::QueryChanged { text } => SearchState {
                query: text,
                ..state
            },

            SearchIntent::Submitted { query } => SearchState {
                loading: true,
                error: None,
                warnings: Vec::new(),
                follow_up: None,
                last_search_query: query,
                generation: state.generation + 1,
                ..state
            },

            SearchIntent::Rejected { message } => SearchState {
                error: Some(message),
                ..state
            },

            SearchIntent::Succeeded {
                generation,
                response,
            } if generation == state.generation => SearchState {
                results: response.results,
                filters: response.filters,
                warnings: response.warnings,
                follow_up: response.follow_up,
                query: String::new(),
                ..state
            },

            SearchIntent::Failed {
                generation,
                message,
            } if generation == state.generation => SearchState {
                error: Some(message),
                ..state
            },

            SearchIntent::Settled { generation } if generation == state.generation => {
                SearchState {
                    loading: false,
                    ..state
                }
            }

            // Stale reply from a superseded submission.
            SearchIntent::Succeeded { .. }
            | SearchIntent::Failed { .. }
            | SearchIntent::Settled { .. } => state,
        }
    }
}
