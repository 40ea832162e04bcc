//! Connection settings resolved from CLI flags, environment and a YAML file.
//!
//! Precedence, highest first:
//! 1. `--flag` or its environment variable (clap handles both)
//! 2. the YAML file given with `--config`
//! 3. built-in defaults
//!
//! ```yaml
//! api_key: "..."
//! endpoint: "https://newsapi.org/v2/everything"
//! timeout_secs: 30
//! ```

use crate::api::{ClientConfig, DEFAULT_ENDPOINT};
use crate::cli::Cli;
use crate::error::AppError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tracing::{info, instrument};
use url::Url;

/// Request timeout used when neither the CLI nor the file sets one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Contents of the optional YAML config file.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Read and parse a YAML config file.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn load_file_config(path: &Path) -> Result<FileConfig, AppError> {
    let display = path.display().to_string();
    let text = fs::read_to_string(path)
        .await
        .map_err(|source| AppError::ConfigRead {
            path: display.clone(),
            source,
        })?;
    let config = serde_yaml::from_str::<Option<FileConfig>>(&text)
        .map_err(|source| AppError::ConfigParse {
            path: display,
            source,
        })?
        .unwrap_or_default();
    info!(
        has_api_key = config.api_key.is_some(),
        endpoint = ?config.endpoint,
        "Loaded config file"
    );
    Ok(config)
}

/// Merge CLI values over file values over defaults.
pub fn resolve(cli: &Cli, file: FileConfig) -> Result<ClientConfig, AppError> {
    let api_key = cli
        .api_key
        .clone()
        .or(file.api_key)
        .filter(|key| !key.trim().is_empty())
        .ok_or(AppError::MissingApiKey)?;

    let endpoint = cli
        .endpoint
        .clone()
        .or(file.endpoint)
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let endpoint = Url::parse(&endpoint).map_err(|source| AppError::Endpoint {
        endpoint: endpoint.clone(),
        source,
    })?;

    let timeout = match cli
        .timeout_secs
        .or(file.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
    {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    };

    Ok(ClientConfig {
        endpoint,
        api_key,
        timeout,
    })
}
