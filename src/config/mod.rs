//! Configuration loading for the search client.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, SearchConfig, ServiceConfig};
