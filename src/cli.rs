//! Command-line interface definitions for Headline Search.
//!
//! All connection settings can come from flags, environment variables or a
//! YAML config file (see [`crate::config`]). The search term itself is read
//! interactively when `--query` is not given.

use chrono::NaiveDate;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Prompt shown before reading the search term from stdin.
pub const PROMPT: &str = "What news do you want? : ";

/// Command-line arguments for the Headline Search application.
///
/// # Examples
///
/// ```sh
/// # Interactive prompt for the term, key from the environment
/// NEWSAPI_KEY=... headline_search
///
/// # Fully specified
/// headline_search -q tesla --from 2025-12-01 --api-key YOUR_KEY -j ./report.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Search term. Prompted for on stdin when omitted
    #[arg(short, long)]
    pub query: Option<String>,

    /// Only return articles published on or after this date (YYYY-MM-DD). Defaults to one week ago
    #[arg(short, long)]
    pub from: Option<NaiveDate>,

    /// News API key
    #[arg(long, env = "NEWSAPI_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Search endpoint URL
    #[arg(long, env = "NEWSAPI_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (0 disables the timeout)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also write the results as a JSON report to this path
    #[arg(short, long)]
    pub json_output: Option<PathBuf>,
}

/// Write [`PROMPT`] to `output` and read one line from `input`.
///
/// The trailing newline is stripped; an empty string means the user entered
/// nothing (or stdin was closed).
pub fn read_term<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<String> {
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
