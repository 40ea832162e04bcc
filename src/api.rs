//! News search API client.
//!
//! [`QueryClient`] wraps a `reqwest::Client` together with the endpoint and
//! credential it should use. Each call to [`QueryClient::search`] builds one
//! [`SearchQuery`], sends exactly one GET and decodes the result list.
//!
//! # Request shape
//!
//! ```text
//! GET <endpoint>?q=<term>&from=<YYYY-MM-DD>&sortBy=publishedAt&apiKey=<key>
//! ```
//!
//! There is no retry: any failure comes back to the caller as
//! [`RequestFailed`].

use crate::error::{QueryError, RequestFailed};
use crate::models::{ApiErrorBody, ArticleList, SearchReport, SearchResponse, SortField};
use crate::utils::{count_keyword_occurrences, redact_api_key, truncate_for_log};
use chrono::NaiveDate;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Default search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://newsapi.org/v2/everything";

/// Connection settings for a [`QueryClient`].
#[derive(Clone)]
pub struct ClientConfig {
    /// Full URL of the `/v2/everything` endpoint. Any query string is replaced.
    pub endpoint: Url,
    /// Credential sent as the `apiKey` parameter.
    pub api_key: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// One search request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
    since: NaiveDate,
    sort: SortField,
}

impl SearchQuery {
    /// Build a query, rejecting a blank search term.
    ///
    /// The term is kept exactly as given, surrounding whitespace included.
    pub fn new(term: &str, since: NaiveDate) -> Result<Self, QueryError> {
        if term.trim().is_empty() {
            return Err(QueryError::EmptyTerm);
        }
        Ok(Self {
            term: term.to_string(),
            since,
            sort: SortField::PublishedAt,
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn since(&self) -> NaiveDate {
        self.since
    }

    pub fn sort(&self) -> SortField {
        self.sort
    }
}

/// Client for the news search endpoint.
#[derive(Debug, Clone)]
pub struct QueryClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl QueryClient {
    /// Build a client with its own connection pool and the configured timeout.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_http_client(config, builder.build()?))
    }

    /// Build a client around an existing `reqwest::Client`.
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    /// The exact URL that will be requested for `query`, credential included.
    pub fn request_url(&self, query: &SearchQuery) -> Url {
        let mut url = self.config.endpoint.clone();
        let params = format!(
            "q={}&from={}&sortBy={}&apiKey={}",
            urlencoding::encode(query.term()),
            query.since().format("%Y-%m-%d"),
            query.sort().as_param(),
            urlencoding::encode(&self.config.api_key),
        );
        url.set_query(Some(&params));
        url
    }

    /// Search for `term` in articles published on or after `since`.
    ///
    /// Returns articles in server order. A response without an `articles`
    /// field yields an empty list.
    ///
    /// # Errors
    ///
    /// [`RequestFailed`] for a blank term, a transport failure, a non-2xx
    /// status or a body that is not the expected JSON.
    #[instrument(level = "info", skip(self))]
    pub async fn search(&self, term: &str, since: NaiveDate) -> Result<ArticleList, RequestFailed> {
        let query = SearchQuery::new(term, since)?;
        Ok(self.execute(&query).await?.articles)
    }

    /// Run a search and tally keyword hits across the returned titles.
    #[instrument(level = "info", skip(self))]
    pub async fn search_report(
        &self,
        term: &str,
        since: NaiveDate,
    ) -> Result<SearchReport, RequestFailed> {
        let articles = self.search(term, since).await?;
        let keyword_frequency = count_keyword_occurrences(term, &articles);
        debug!(keyword_frequency, "Counted keyword occurrences");

        Ok(SearchReport {
            term: term.to_string(),
            since,
            keyword_frequency,
            articles,
        })
    }

    async fn execute(&self, query: &SearchQuery) -> Result<SearchResponse, RequestFailed> {
        let url = self.request_url(query);
        let t0 = Instant::now();
        debug!(url = %redact_api_key(&url), "Sending search request");

        let response = self.http.get(url).send().await.inspect_err(|e| {
            warn!(elapsed_ms = t0.elapsed().as_millis() as u64, error = %e, "Search request failed")
        })?;
        let status = response.status();
        let body = response.text().await?;
        let elapsed_ms = t0.elapsed().as_millis() as u64;

        if !status.is_success() {
            let error_body = serde_json::from_str::<ApiErrorBody>(&body).ok();
            let code = error_body.as_ref().and_then(|e| e.code.clone());
            let message = error_body
                .and_then(|e| e.message)
                .unwrap_or_else(|| truncate_for_log(&body, 200));
            warn!(%status, elapsed_ms, ?code, %message, "Search endpoint rejected request");
            return Err(RequestFailed::Status { status, message });
        }

        let decoded: SearchResponse = serde_json::from_str(&body).inspect_err(|e| {
            warn!(
                error = %e,
                body_preview = %truncate_for_log(&body, 300),
                "Search response was not valid JSON"
            )
        })?;
        info!(
            %status,
            elapsed_ms,
            count = decoded.articles.len(),
            total_results = ?decoded.total_results,
            "Search completed"
        );
        Ok(decoded)
    }
}
