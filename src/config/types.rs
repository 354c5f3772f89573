use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Where and how to reach the search service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Scheme, host and port (e.g., "http://localhost:8080").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the natural-language search endpoint.
    #[serde(default = "default_search_path")]
    pub search_path: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Client-side handling of search responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Drop filter values outside the known vocabulary (default: true).
    #[serde(default = "default_sanitize_filters")]
    pub sanitize_filters: bool,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_search_path() -> String {
    "/api/nl-search".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_sanitize_filters() -> bool {
    true
}

impl ServiceConfig {
    /// Full URL of the search endpoint.
    pub fn search_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.search_path
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            search_path: default_search_path(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            sanitize_filters: default_sanitize_filters(),
        }
    }
}
