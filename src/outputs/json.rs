//! JSON report output.
//!
//! Serialises a [`SearchReport`] so the results of a run can be picked up by
//! other tools. Parent directories are created as needed and an existing
//! file is overwritten.

use crate::models::SearchReport;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write `report` as pretty-printed JSON to `path`.
///
/// # Errors
///
/// Fails if the parent directory cannot be created or the file cannot be
/// written.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_report(
    report: &SearchReport,
    path: &Path,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let json = serde_json::to_string_pretty(report)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(dir = %parent.display(), error = %e, "Failed to create report dir");
            return Err(e.into());
        }
    }

    fs::write(path, json).await?;
    info!(articles = report.articles.len(), "Wrote JSON report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Article;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_write_report_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/report.json");
        let report = SearchReport {
            term: "ai".to_string(),
            since: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            keyword_frequency: 2,
            articles: vec![Article {
                title: Some("AI wins AI race".to_string()),
                url: Some("http://a".to_string()),
                source: Some("Wire".to_string()),
            }],
        };

        write_report(&report, &path).await.unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["term"], "ai");
        assert_eq!(written["since"], "2025-12-31");
        assert_eq!(written["keyword_frequency"], 2);
        assert_eq!(written["articles"][0]["title"], "AI wins AI race");
        assert_eq!(written["articles"][0]["source"], "Wire");
    }
}
