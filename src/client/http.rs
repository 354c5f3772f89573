use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::client::error::SearchError;
use crate::client::types::{ErrorBody, SearchRequest, SearchResponse};
use crate::client::SearchService;
use crate::config::ServiceConfig;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Search service reached over HTTP.
pub struct HttpSearchClient {
    client: Client,
    url: String,
}

impl HttpSearchClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .map_err(|source| SearchError::Transport { source })?;

        Ok(Self {
            client,
            url: config.search_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SearchService for HttpSearchClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        debug!(request_id = %request_id, url = %self.url, "submitting search");

        let response = self
            .client
            .post(&self.url)
            .header(REQUEST_ID_HEADER, &request_id)
            .json(request)
            .send()
            .await
            .map_err(|source| SearchError::Transport { source })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| SearchError::Transport { source })?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|body| body.message);
            warn!(
                request_id = %request_id,
                status = status.as_u16(),
                message = message.as_deref().unwrap_or(""),
                "search rejected"
            );
            return Err(SearchError::Rejected {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                message,
            });
        }

        let parsed: SearchResponse = serde_json::from_slice(&body)
            .map_err(|e| SearchError::Decode(e.to_string()))?;
        debug!(
            request_id = %request_id,
            results = parsed.results.len(),
            "search completed"
        );
        Ok(parsed.normalized())
    }
}
