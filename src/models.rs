//! Data models for search results and the report written after a search.
//!
//! - [`Article`]: one result record as decoded from the news API
//! - [`SearchResponse`]: the response envelope around the article list
//! - [`SortField`]: the sort order sent with every query
//! - [`SearchReport`]: articles plus the keyword tally, serialised to JSON
//!
//! The news API uses camelCase field names, so the wire types rename on
//! (de)serialisation while keeping snake_case in Rust.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Sort order understood by the `/v2/everything` endpoint.
///
/// Only most-recently-published-first is ever requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    PublishedAt,
}

impl SortField {
    /// The value sent in the `sortBy` query parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            SortField::PublishedAt => "publishedAt",
        }
    }
}

/// A single search result.
///
/// Every field is optional: the service sends `null` for removed articles
/// and we keep whatever it returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Article {
    /// The headline.
    #[serde(default)]
    pub title: Option<String>,
    /// Link to the full article.
    #[serde(default)]
    pub url: Option<String>,
    /// Publisher name. Read from the API's nested `source.name` object or,
    /// in a JSON report, from the plain string it is written as.
    #[serde(
        default,
        deserialize_with = "source_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub source: Option<String>,
}

/// Results in the order the service returned them (newest first).
pub type ArticleList = Vec<Article>;

#[derive(Deserialize)]
#[serde(untagged)]
enum SourceField {
    Name(String),
    Ref {
        #[serde(default)]
        name: Option<String>,
    },
}

fn source_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let source = Option::<SourceField>::deserialize(deserializer)?;
    Ok(source.and_then(|s| match s {
        SourceField::Name(name) => Some(name),
        SourceField::Ref { name } => name,
    }))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<ArticleList, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ArticleList>::deserialize(deserializer)?.unwrap_or_default())
}

/// Successful response body from the search endpoint.
///
/// A missing or `null` `articles` field is an empty result, not an error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub articles: ArticleList,
}

/// Error body the service sends alongside a non-success status.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Everything produced by one search, in a shape suitable for the JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    /// The search term as entered.
    pub term: String,
    /// Lower bound on publication date that was sent with the query.
    pub since: NaiveDate,
    /// Case-insensitive occurrences of `term` across all returned titles.
    pub keyword_frequency: usize,
    /// The returned articles, in server order.
    pub articles: ArticleList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_field_param() {
        assert_eq!(SortField::default().as_param(), "publishedAt");
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {"source": {"id": null, "name": "Reuters"}, "title": "Tesla stock rises", "url": "http://a", "author": "x"},
                {"title": "Tesla recall", "url": "http://b"}
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total_results, Some(2));
        assert_eq!(response.articles.len(), 2);
        assert_eq!(response.articles[0].source.as_deref(), Some("Reuters"));
        assert_eq!(response.articles[1].source, None);
        assert_eq!(response.articles[1].title.as_deref(), Some("Tesla recall"));
    }

    #[test]
    fn test_missing_articles_is_empty() {
        let response: SearchResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(response.articles.is_empty());
    }

    #[test]
    fn test_null_articles_is_empty() {
        let response: SearchResponse = serde_json::from_str(r#"{"articles":null}"#).unwrap();
        assert!(response.articles.is_empty());
    }

    #[test]
    fn test_null_title_and_url() {
        let article: Article =
            serde_json::from_str(r#"{"title": null, "url": null, "source": null}"#).unwrap();
        assert_eq!(article, Article::default());
    }

    #[test]
    fn test_written_article_reads_back() {
        let article = Article {
            title: Some("Tesla recall".to_string()),
            url: Some("http://b".to_string()),
            source: Some("Wire".to_string()),
        };
        let json = serde_json::to_string(&article).unwrap();
        assert!(json.contains(r#""source":"Wire""#));

        let read_back: Article = serde_json::from_str(&json).unwrap();
        assert_eq!(read_back, article);
    }

    #[test]
    fn test_error_body_deserialization() {
        let json = r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid."}"#;
        let body: ApiErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.code.as_deref(), Some("apiKeyInvalid"));
        assert_eq!(body.message.as_deref(), Some("Your API key is invalid."));
    }

    #[test]
    fn test_report_serialization() {
        let report = SearchReport {
            term: "ai".to_string(),
            since: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            keyword_frequency: 2,
            articles: vec![Article {
                title: Some("AI wins AI race".to_string()),
                url: Some("http://a".to_string()),
                source: None,
            }],
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""since":"2025-12-31""#));
        assert!(json.contains(r#""keyword_frequency":2"#));
        assert!(!json.contains("source"));
    }
}
