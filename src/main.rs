use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use nlsearch::cli::Cli;
use nlsearch::client::HttpSearchClient;
use nlsearch::config::Config;
use nlsearch::logging::{init_cli_tracing, init_tui_tracing};
use nlsearch::report::{render_json, render_text};
use nlsearch::session::SearchSession;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let query = cli.query_text();
    if query.is_some() {
        init_cli_tracing();
    } else {
        init_tui_tracing();
    }

    let config = cli.resolve_config().context("failed to load configuration")?;
    let session = build_session(&config)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    match query {
        Some(query) => one_shot(&runtime, &session, &query, cli.json),
        None => {
            info!(url = %config.service.search_url(), "starting interactive search");
            nlsearch::ui::runtime::run(session, runtime.handle().clone())
                .context("terminal UI failed")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn build_session(config: &Config) -> anyhow::Result<SearchSession> {
    let client = HttpSearchClient::new(&config.service).context("failed to build HTTP client")?;
    info!(url = %client.url(), "search service configured");
    Ok(SearchSession::new(Arc::new(client)).with_sanitize_filters(config.search.sanitize_filters))
}

fn one_shot(
    runtime: &tokio::runtime::Runtime,
    session: &SearchSession,
    query: &str,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let state = runtime.block_on(session.run(query));

    if let Some(error) = &state.error {
        eprintln!("Error: {error}");
        return Ok(ExitCode::FAILURE);
    }

    let output = if json {
        let mut rendered = render_json(&state).context("failed to encode JSON report")?;
        rendered.push('\n');
        rendered
    } else {
        render_text(&state)
    };
    io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context("failed to write report")?;
    Ok(ExitCode::SUCCESS)
}
