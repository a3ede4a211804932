//! Enriches keyword clusters with search-console performance data.
//!
//! The report fetch itself is not implemented: the client authenticates
//! nothing and every fetch yields an empty report, so all downstream
//! aggregates are neutral. The enrichment shape is final; only the data
//! source is missing.

use std::path::{Path, PathBuf};

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use cornerstone_core::{GscPerformance, KeywordCluster};

/// One query row from a search-console report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryStat {
    /// The search query.
    pub query: String,
    /// Impressions over the reporting window.
    pub impressions: u64,
    /// Clicks over the reporting window.
    pub clicks: u64,
    /// Mean ranking position over the window.
    pub position: f64,
    /// Click-through rate over the window.
    pub ctr: f64,
}

/// Per-metric series for one cluster's keywords.
#[derive(Debug, Clone, Default)]
pub struct PerformanceSeries {
    /// Impression counts, one per matched report row.
    pub impressions: Vec<u64>,
    /// Click counts, one per matched report row.
    pub clicks: Vec<u64>,
    /// Ranking positions, one per matched report row.
    pub positions: Vec<f64>,
    /// Click-through rates, one per matched report row.
    pub ctr: Vec<f64>,
}

/// Client for a search-console-style analytics source.
pub struct SearchConsoleClient {
    /// Path to the service credentials file.
    credentials_path: PathBuf,
}

impl SearchConsoleClient {
    /// Creates a client for the given credentials file.
    ///
    /// Authentication is a placeholder: the path is recorded but no
    /// session is established.
    pub fn new<P: Into<PathBuf>>(credentials_path: P) -> Self {
        let client = Self {
            credentials_path: credentials_path.into(),
        };
        tracing::debug!(
            "search-console authentication not implemented; credentials at {:?} unused",
            client.credentials_path
        );
        client
    }

    /// The credentials path this client was built with.
    pub fn credentials_path(&self) -> &Path {
        &self.credentials_path
    }

    /// Whether a live service session exists. Always false while
    /// authentication is unimplemented.
    pub fn is_authenticated(&self) -> bool {
        false
    }

    /// Fetches the query report for a site over the trailing window.
    ///
    /// Placeholder: always returns an empty report.
    pub fn fetch_report(&self, site_url: &str, days: i64) -> Vec<QueryStat> {
        let window_start = Utc::now() - Duration::days(days);
        tracing::warn!(
            "search-console fetch not implemented; returning empty report for {site_url} since {}",
            window_start.date_naive()
        );
        Vec::new()
    }

    /// Matches report rows to a cluster's keywords.
    ///
    /// Placeholder: always returns empty series.
    fn match_stats(_keywords: &[String], _report: &[QueryStat]) -> PerformanceSeries {
        PerformanceSeries::default()
    }

    /// Identifies keywords trending upward. Placeholder: always empty.
    fn trending(_series: &PerformanceSeries) -> Vec<String> {
        Vec::new()
    }

    /// Identifies well-ranked keywords with poor click-through.
    /// Placeholder: always empty.
    fn underperforming(_series: &PerformanceSeries) -> Vec<String> {
        Vec::new()
    }

    /// Attaches aggregated performance to every cluster.
    ///
    /// With the fetch unimplemented, every aggregate is zero and both
    /// keyword lists are empty; the attachment shape itself is exercised
    /// end to end.
    pub fn enhance_clusters(
        &self,
        clusters: Vec<KeywordCluster>,
        site_url: &str,
        days: i64,
    ) -> Vec<KeywordCluster> {
        let report = self.fetch_report(site_url, days);

        clusters
            .into_iter()
            .map(|mut cluster| {
                let series = Self::match_stats(&cluster.keywords, &report);
                cluster.gsc_performance = Some(GscPerformance {
                    total_impressions: series.impressions.iter().sum(),
                    total_clicks: series.clicks.iter().sum(),
                    avg_position: mean(&series.positions),
                    avg_ctr: mean(&series.ctr),
                    trending_keywords: Self::trending(&series),
                    underperforming_keywords: Self::underperforming(&series),
                });
                cluster
            })
            .collect()
    }
}

/// Arithmetic mean; 0.0 for an empty series.
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that fetches are stubbed to empty regardless of input.
    #[test]
    fn test_fetch_report_is_empty() {
        let client = SearchConsoleClient::new("/tmp/credentials.json");
        assert!(client.fetch_report("https://example.com", 90).is_empty());
        assert!(client.fetch_report("", 0).is_empty());
        assert!(!client.is_authenticated());
    }

    /// Tests that enrichment attaches neutral performance to every cluster.
    #[test]
    fn test_enhance_clusters_attaches_neutral_performance() {
        let client = SearchConsoleClient::new("credentials.json");
        let clusters = vec![
            KeywordCluster::new("espresso").with_keywords(vec!["espresso beans".to_owned()]),
            KeywordCluster::new("grinders"),
        ];

        let enhanced = client.enhance_clusters(clusters, "https://example.com", 90);
        assert_eq!(enhanced.len(), 2);

        for cluster in &enhanced {
            let perf = cluster
                .gsc_performance
                .as_ref()
                .expect("Every cluster gains performance data");
            assert_eq!(perf.total_impressions, 0);
            assert_eq!(perf.total_clicks, 0);
            assert!(perf.avg_position.abs() < f64::EPSILON);
            assert!(perf.avg_ctr.abs() < f64::EPSILON);
            assert!(perf.trending_keywords.is_empty());
            assert!(perf.underperforming_keywords.is_empty());
        }
    }

    /// Tests that cluster fields other than performance survive enrichment.
    #[test]
    fn test_enhance_clusters_preserves_fields() {
        let client = SearchConsoleClient::new("credentials.json");
        let clusters = vec![
            KeywordCluster::new("espresso").with_keywords(vec!["portafilter".to_owned()]),
        ];

        let enhanced = client.enhance_clusters(clusters, "https://example.com", 30);
        assert_eq!(enhanced[0].main_topic, "espresso");
        assert_eq!(enhanced[0].keywords, vec!["portafilter".to_owned()]);
    }

    /// Tests the mean helper's empty-series behavior.
    #[test]
    fn test_mean_of_empty_series_is_zero() {
        assert!(mean(&[]).abs() < f64::EPSILON);
        assert!((mean(&[2.0, 4.0]) - 3.0).abs() < f64::EPSILON);
    }
}
