//! Plain-text listing of search results.
//!
//! Each article is printed as `<index> <title> <url>` with a 1-based index,
//! followed by a divider. Missing titles and URLs get placeholders so every
//! entry keeps three columns.

use crate::models::SearchReport;
use std::fmt::Write;

/// Line printed between articles.
pub const DIVIDER: &str = "*****************************************************";

const UNTITLED: &str = "Untitled Article";
const NO_URL: &str = "#";

/// Render the article listing and keyword tally for `report`.
pub fn render_listing(report: &SearchReport) -> String {
    let mut out = String::new();

    if report.articles.is_empty() {
        writeln!(out, "No articles found for \"{}\" since {}", report.term, report.since).unwrap();
    }

    for (index, article) in report.articles.iter().enumerate() {
        writeln!(
            out,
            "{} {} {}",
            index + 1,
            article.title.as_deref().unwrap_or(UNTITLED),
            article.url.as_deref().unwrap_or(NO_URL)
        )
        .unwrap();
        writeln!(out, "\n{DIVIDER}\n").unwrap();
    }

    writeln!(
        out,
        "Keyword \"{}\" appears {} time(s) in {} headline(s)",
        report.term,
        report.keyword_frequency,
        report.articles.len()
    )
    .unwrap();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Article;
    use chrono::NaiveDate;

    fn report(articles: Vec<Article>, keyword_frequency: usize) -> SearchReport {
        SearchReport {
            term: "tesla".to_string(),
            since: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            keyword_frequency,
            articles,
        }
    }

    #[test]
    fn test_render_uses_one_based_index() {
        let out = render_listing(&report(
            vec![
                Article {
                    title: Some("Tesla stock rises".to_string()),
                    url: Some("http://a".to_string()),
                    source: None,
                },
                Article {
                    title: Some("Tesla recall".to_string()),
                    url: Some("http://b".to_string()),
                    source: None,
                },
            ],
            2,
        ));

        let expected = format!(
            "1 Tesla stock rises http://a\n\n{DIVIDER}\n\n2 Tesla recall http://b\n\n{DIVIDER}\n\nKeyword \"tesla\" appears 2 time(s) in 2 headline(s)\n"
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_placeholders() {
        let out = render_listing(&report(vec![Article::default()], 0));
        assert!(out.starts_with("1 Untitled Article #\n"));
    }

    #[test]
    fn test_render_empty() {
        let out = render_listing(&report(vec![], 0));
        assert!(out.starts_with("No articles found for \"tesla\" since 2025-12-31\n"));
        assert!(!out.contains(DIVIDER));
    }
}
