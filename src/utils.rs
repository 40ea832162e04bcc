//! Helper functions for keyword counting, log hygiene and date defaults.
//!
//! - Keyword frequency across article titles
//! - Credential redaction for URLs that get printed or logged
//! - String truncation for logging response bodies
//! - Default lower bound for the publication-date filter

use crate::models::Article;
use chrono::{Days, Local, NaiveDate};
use url::Url;

/// Count case-insensitive, non-overlapping occurrences of `term` in every
/// article title and sum them.
///
/// A missing title counts as an empty string. An empty `term` yields 0.
///
/// # Examples
///
/// ```ignore
/// let articles = vec![Article { title: Some("AI wins AI race".into()), ..Default::default() }];
/// assert_eq!(count_keyword_occurrences("ai", &articles), 2);
/// ```
pub fn count_keyword_occurrences(term: &str, articles: &[Article]) -> usize {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return 0;
    }
    articles
        .iter()
        .map(|article| {
            article
                .title
                .as_deref()
                .unwrap_or_default()
                .to_lowercase()
                .matches(needle.as_str())
                .count()
        })
        .sum()
}

/// Replace the value of the `apiKey` query parameter with `REDACTED`.
///
/// Only that value changes; every other parameter keeps its exact encoding
/// so the result matches the URL that was sent.
pub fn redact_api_key(url: &Url) -> Url {
    let Some(query) = url.query() else {
        return url.clone();
    };
    let redacted_query = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some(("apiKey", _)) => "apiKey=REDACTED",
            _ => pair,
        })
        .collect::<Vec<_>>()
        .join("&");

    let mut redacted = url.clone();
    redacted.set_query(Some(&redacted_query));
    redacted
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut at the last char boundary before `max` bytes and
/// suffixed with `"…(+N bytes)"`.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}

/// Default `from` date: one week before today's local date.
pub fn default_since() -> NaiveDate {
    let today = Local::now().date_naive();
    today.checked_sub_days(Days::new(7)).unwrap_or(today)
}
