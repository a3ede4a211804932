//! Subcommand handlers: load inputs, run the analysis, emit JSON reports.

use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use serde::Serialize;
use serde_json::{json, to_string_pretty};

use cornerstone_analysis::{
    AuthorityAnalyzer, ContentOptimizer, EntityAnalyzer, ExpansionEngine, IntentAnalyzer,
    SearchConsoleClient,
};
use cornerstone_core::{Config, KeywordCluster};
use cornerstone_providers::{OpenAiChat, SerpApiClient};
use cornerstone_vectors::VectorStore;

use crate::cli::{Cli, Command};

/// Dispatches the parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Score { content, cluster } => score(&content, &cluster),
        Command::Intent { keyword } => intent(&config, &keyword).await,
        Command::Expand { clusters } => expand(&config, &clusters).await,
        Command::Entities { keywords } => entities(&keywords),
        Command::Coverage { clusters } => coverage(&clusters),
        Command::Briefs { clusters } => briefs(&clusters),
        Command::Console {
            clusters,
            site,
            days,
            credentials,
        } => console(&clusters, &site, days, &credentials),
    }
}

/// Loads the given config file, or the default location when none is
/// given.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Config::load_or_create().context("loading default config"),
    }
}

/// Renders a report as pretty JSON on stdout.
fn emit<T: Serialize>(value: &T) -> Result<()> {
    let rendered = to_string_pretty(value)?;
    #[allow(clippy::print_stdout, reason = "Reports are the CLI's output")]
    {
        println!("{rendered}");
    }
    Ok(())
}

/// Reads one cluster from a JSON file.
fn read_cluster(path: &Path) -> Result<KeywordCluster> {
    let contents = read_to_string(path)
        .with_context(|| format!("reading cluster file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parsing cluster file {}", path.display()))
}

/// Reads a cluster array from a JSON file.
fn read_cluster_list(path: &Path) -> Result<Vec<KeywordCluster>> {
    let contents = read_to_string(path)
        .with_context(|| format!("reading clusters file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parsing clusters file {}", path.display()))
}

/// Reads a cluster-id to keyword-list map from a JSON file.
fn read_cluster_map(path: &Path) -> Result<HashMap<u64, Vec<String>>> {
    let contents = read_to_string(path)
        .with_context(|| format!("reading clusters file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parsing clusters file {}", path.display()))
}

/// Scores a content file against a target cluster.
fn score(content_path: &Path, cluster_path: &Path) -> Result<()> {
    let content = read_to_string(content_path)
        .with_context(|| format!("reading content file {}", content_path.display()))?;
    let cluster = read_cluster(cluster_path)?;

    let report = ContentOptimizer::new().score(&content, &cluster);
    emit(&report)
}

/// Classifies a keyword's intent from its live SERP.
async fn intent(config: &Config, keyword: &str) -> Result<()> {
    let serp = SerpApiClient::from_config_or_env(config.get_api_key("serpapi"))?
        .with_timeout(Duration::from_secs(config.http.serp_timeout_seconds));

    let report = IntentAnalyzer::new(serp).analyze(keyword).await;
    emit(&report)
}

/// Expands clusters with whatever backends the config provides.
async fn expand(config: &Config, clusters_path: &Path) -> Result<()> {
    let cluster_map = read_cluster_map(clusters_path)?;

    let mut engine = ExpansionEngine::new().with_similar_terms(config.vectors.similar_terms);

    match config.get_api_key("openai").map(OpenAiChat::new) {
        Some(Ok(chat)) => engine = engine.with_chat(Arc::new(chat)),
        Some(Err(err)) => tracing::warn!("chat expansion disabled: {err}"),
        None => tracing::warn!("no OpenAI key configured - chat expansion disabled"),
    }

    if let Some(model_path) = &config.vectors.model_path {
        match VectorStore::load(model_path) {
            Ok(store) => engine = engine.with_vectors(store),
            Err(err) => tracing::warn!("vector expansion disabled: {err}"),
        }
    } else {
        tracing::warn!("no vector model configured - vector expansion disabled");
    }

    let expanded = engine.expand(&cluster_map).await;
    emit(&expanded)
}

/// Extracts entities from the given keywords.
fn entities(keywords: &[String]) -> Result<()> {
    let analyzer = EntityAnalyzer::with_rule_tagger();
    let collection = analyzer.extract(keywords);
    let graph = EntityAnalyzer::relationship_graph(&collection);

    emit(&json!({
        "entities": collection,
        "graph_nodes": graph.node_count(),
        "graph_edges": graph.edge_count(),
    }))
}

/// Reports topical coverage across a cluster set.
fn coverage(clusters_path: &Path) -> Result<()> {
    let clusters = read_cluster_list(clusters_path)?;
    let report = AuthorityAnalyzer::new().coverage(&clusters);
    emit(&report)
}

/// Generates content briefs from a cluster set.
fn briefs(clusters_path: &Path) -> Result<()> {
    let clusters = read_cluster_list(clusters_path)?;
    let briefs = AuthorityAnalyzer::new().briefs(&clusters);
    emit(&briefs)
}

/// Enriches clusters with search-console performance data.
fn console(clusters_path: &Path, site: &str, days: i64, credentials: &Path) -> Result<()> {
    let clusters = read_cluster_list(clusters_path)?;
    let enhanced =
        SearchConsoleClient::new(credentials).enhance_clusters(clusters, site, days);
    emit(&enhanced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Tests reading a single cluster file.
    #[test]
    fn test_read_cluster_file() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("cluster.json");
        fs::write(
            &path,
            r#"{"main_topic": "espresso", "keywords": ["portafilter"]}"#,
        )
        .expect("Failed to write cluster");

        let cluster = read_cluster(&path).expect("Cluster should parse");
        assert_eq!(cluster.main_topic, "espresso");
        assert_eq!(cluster.keywords, vec!["portafilter".to_owned()]);
    }

    /// Tests reading a cluster-id map with string-encoded numeric keys.
    #[test]
    fn test_read_cluster_map_numeric_keys() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("clusters.json");
        fs::write(&path, r#"{"1": ["espresso"], "2": ["grinder", "burrs"]}"#)
            .expect("Failed to write clusters");

        let map = read_cluster_map(&path).expect("Cluster map should parse");
        assert_eq!(map.len(), 2);
        assert_eq!(map[&2], vec!["grinder".to_owned(), "burrs".to_owned()]);
    }

    /// Tests that a malformed clusters file surfaces a parse error.
    #[test]
    fn test_read_cluster_list_malformed() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("clusters.json");
        fs::write(&path, "not json").expect("Failed to write clusters");

        assert!(read_cluster_list(&path).is_err());
    }
}
