//! Error types for the search client and the command-line boundary.
//!
//! [`RequestFailed`] is the single error kind returned by
//! [`QueryClient::search`](crate::api::QueryClient::search). Its variants
//! record which stage went wrong so the diagnostic line is useful, but
//! callers are expected to treat every variant the same way.
//!
//! [`AppError`] is what `main` reports before exiting non-zero.

use reqwest::StatusCode;
use thiserror::Error;

/// Any failure while issuing or decoding the outbound search request.
#[derive(Debug, Error)]
pub enum RequestFailed {
    /// The query was rejected before a request was sent.
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] QueryError),

    /// Connection, TLS, timeout or body-read failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("request failed with HTTP {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// The body was not the JSON document we expected.
    #[error("request failed: response was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Problems building a [`SearchQuery`](crate::api::SearchQuery).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("search term must not be empty")]
    EmptyTerm,
}

/// Errors surfaced at the process boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid endpoint {endpoint:?}: {source}")]
    Endpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("no API key configured (use --api-key, NEWSAPI_KEY or the config file)")]
    MissingApiKey,

    #[error("failed to read search term from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to write JSON report to {path}: {source}")]
    Report {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Request(#[from] RequestFailed),
}
