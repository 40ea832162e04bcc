//! # Headline Search
//!
//! Queries the NewsAPI `/v2/everything` endpoint for a keyword, prints the
//! matching headlines with their links, and counts how often the keyword
//! appears in those headlines.
//!
//! ## Usage
//!
//! ```sh
//! NEWSAPI_KEY=... headline_search --from 2025-12-01
//! What news do you want? : tesla
//! ```
//!
//! ## Flow
//!
//! 1. **Configure**: merge CLI flags, environment and the optional YAML file
//! 2. **Prompt**: read the search term unless `--query` was given
//! 3. **Search**: one GET against the endpoint, no retries
//! 4. **Output**: numbered listing on stdout, optional JSON report
//!
//! Logs go to stderr (`RUST_LOG` controls verbosity) so stdout only carries
//! the listing.

use chrono::NaiveDate;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod config;
mod error;
mod models;
mod outputs;
mod utils;

use api::{QueryClient, SearchQuery};
use cli::{Cli, read_term};
use config::FileConfig;
use error::AppError;
use outputs::{console, json};
use utils::{default_since, redact_api_key};

#[tokio::main]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args.query, ?args.from, ?args.config, ?args.json_output, "Parsed CLI arguments");

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "headline_search failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[instrument(level = "info", skip_all)]
async fn run(args: Cli) -> Result<(), AppError> {
    let start_time = std::time::Instant::now();

    let file_config = match &args.config {
        Some(path) => config::load_file_config(path).await?,
        None => FileConfig::default(),
    };
    let client_config = config::resolve(&args, file_config)?;
    debug!(?client_config, "Resolved client configuration");

    let term = match &args.query {
        Some(term) => term.clone(),
        None => read_term(io::stdin().lock(), io::stdout()).map_err(AppError::Stdin)?,
    };
    let since: NaiveDate = args.from.unwrap_or_else(default_since);
    let query = SearchQuery::new(&term, since)?;

    let client = QueryClient::new(client_config).map_err(AppError::Client)?;
    println!("{}", redact_api_key(&client.request_url(&query)));

    let report = client.search_report(query.term(), query.since()).await?;
    print!("{}", console::render_listing(&report));

    if let Some(path) = &args.json_output {
        json::write_report(&report, path)
            .await
            .map_err(|source| AppError::Report {
                path: path.display().to_string(),
                source,
            })?;
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        articles = report.articles.len(),
        keyword_frequency = report.keyword_frequency,
        "Execution complete"
    );
    Ok(())
}
