//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

/// Ask questions about parcel orders in plain language.
///
/// With a query, runs one search and prints the result. Without one, opens
/// the interactive search screen.
#[derive(Debug, Parser)]
#[command(name = "nlsearch", version, about)]
pub struct Cli {
    /// Natural-language query; words are joined with spaces
    pub query: Vec<String>,

    /// Print the result as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Search service base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Path to a config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u32>,
}

impl Cli {
    /// The query words joined into one string, or `None` for interactive mode.
    pub fn query_text(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }

    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(url) = &self.url {
            config.service.base_url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.service.timeout_seconds = timeout;
        }
        config.validate()?;
        Ok(config)
    }
}
