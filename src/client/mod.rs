//! Query submission to the remote search service.
//!
//! The service does all natural-language interpretation; this side only
//! posts the trimmed query and decodes the payload.

mod error;
mod http;
mod types;

use async_trait::async_trait;

pub use error::{SearchError, GENERIC_FAILURE};
pub use http::HttpSearchClient;
pub use types::{OrderRecord, SearchRequest, SearchResponse};

/// Anything that can answer a natural-language query.
///
/// Implemented by [`HttpSearchClient`] for the real service; tests plug in
/// in-memory fakes.
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Submit one query and wait for the full payload.
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError>;
}
