//! Intents for the search screen.

use crate::client::SearchResponse;
use crate::ui::mvi::Intent;

/// Events that move a search session forward.
#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// The input text was edited.
    QueryChanged { text: String },

    /// A trimmed, non-empty query was sent. Starts a new generation.
    Submitted { query: String },

    /// Submission refused before any request was made.
    Rejected { message: String },

    /// The service answered.
    Succeeded {
        generation: u64,
        response: SearchResponse,
    },

    /// The request failed; `message` is already user-facing.
    Failed { generation: u64, message: String },

    /// The request finished, successfully or not.
    Settled { generation: u64 },
}

impl Intent for SearchIntent {}
