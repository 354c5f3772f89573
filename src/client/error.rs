//! Errors surfaced by the search service client.

use thiserror::Error;

/// Shown when neither the service nor the transport says anything useful.
pub const GENERIC_FAILURE: &str = "Search failed";

/// Errors that can occur while submitting a query.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Could not reach the service or the request timed out.
    #[error("Connection to search service failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("Search service returned {status}: {}", rejection_detail(.message, .status_text))]
    Rejected {
        status: u16,
        status_text: String,
        message: Option<String>,
    },

    /// The success body did not match the expected payload.
    #[error("Invalid search response: {0}")]
    Decode(String),
}

impl SearchError {
    /// Text to show the user.
    ///
    /// Prefers the service's own message, then the HTTP status text, then
    /// a generic fallback.
    pub fn display_message(&self) -> String {
        match self {
            SearchError::Rejected {
                message,
                status_text,
                ..
            } => non_empty(message.as_deref())
                .or_else(|| non_empty(Some(status_text.as_str())))
                .unwrap_or(GENERIC_FAILURE)
                .to_string(),
            SearchError::Transport { .. } | SearchError::Decode(_) => GENERIC_FAILURE.to_string(),
        }
    }

    /// HTTP status, when the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            SearchError::Rejected { status, .. } => Some(*status),
            SearchError::Transport { source } => source.status().map(|s| s.as_u16()),
            SearchError::Decode(_) => None,
        }
    }
}

fn rejection_detail<'a>(message: &'a Option<String>, status_text: &'a str) -> &'a str {
    message.as_deref().unwrap_or(status_text)
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|text| !text.is_empty())
}
