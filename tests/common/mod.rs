//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use async_trait::async_trait;
use nlsearch::client::{SearchError, SearchRequest, SearchResponse, SearchService};
use nlsearch::config::ServiceConfig;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::Notify;

/// Write `content` to a `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Service settings pointing at `base_url` with short timeouts.
pub fn service_config(base_url: &str) -> ServiceConfig {
    ServiceConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
        ..ServiceConfig::default()
    }
}

pub type Reply = Result<SearchResponse, SearchError>;

/// In-memory service: canned replies plus a record of every query received.
pub struct ScriptedService {
    replies: Mutex<VecDeque<(Reply, Option<Arc<Notify>>)>>,
    queries: Mutex<Vec<String>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Queue a reply returned immediately.
    pub fn push(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back((reply, None));
    }

    /// Queue a reply that is held back until `gate` is notified.
    pub fn push_gated(&self, reply: Reply, gate: Arc<Notify>) {
        self.replies.lock().unwrap().push_back((reply, Some(gate)));
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchService for ScriptedService {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        self.queries.lock().unwrap().push(request.query.clone());
        let next = self.replies.lock().unwrap().pop_front();
        let Some((reply, gate)) = next else {
            return Ok(SearchResponse::default());
        };
        if let Some(gate) = gate {
            gate.notified().await;
        }
        reply
    }
}

/// Response payload from JSON text.
pub fn response(json: &str) -> SearchResponse {
    serde_json::from_str(json).expect("valid response JSON")
}

/// Upper bound for async waits in tests.
pub const WAIT: Duration = Duration::from_secs(5);
