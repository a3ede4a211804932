//! End-to-end exercises across the analysis modules, using the mock chat
//! model and an in-memory vector store in place of live services.

use std::collections::HashMap;
use std::sync::Arc;

use cornerstone_analysis::{
    AuthorityAnalyzer, ContentOptimizer, EntityAnalyzer, ExpansionEngine, IntentAnalyzer,
    SearchConsoleClient,
};
use cornerstone_core::{Intent, KeywordCluster};
use cornerstone_providers::{MockChat, SerpData};
use cornerstone_vectors::VectorStore;

fn demo_clusters() -> Vec<KeywordCluster> {
    vec![
        KeywordCluster::new("home espresso")
            .with_keywords(vec![
                "espresso machine".to_owned(),
                "burr grinder".to_owned(),
                "portafilter".to_owned(),
            ])
            .with_representative_keywords(vec!["espresso machine".to_owned()])
            .with_related_terms(vec!["extraction".to_owned(), "crema".to_owned()]),
        KeywordCluster::new("pour over")
            .with_keywords(vec!["v60".to_owned(), "gooseneck kettle".to_owned()]),
    ]
}

/// Scores a draft against a cluster, then confirms the missing keywords
/// feed straight into the brief produced for the same cluster.
#[test]
fn test_score_then_brief_flow() {
    let clusters = demo_clusters();
    let draft = "Choosing an espresso machine starts with the grinder; \
                 a quality burr grinder matters more than the machine.";

    let report = ContentOptimizer::new().score(draft, &clusters[0]);
    assert_eq!(
        report.suggestions.missing_keywords,
        vec!["portafilter".to_owned()],
        "Only the unmentioned keyword is missing"
    );
    assert!(report.overall_score > 0.0);
    assert!(report.overall_score < 1.0);

    let briefs = AuthorityAnalyzer::new().briefs(&clusters);
    assert_eq!(briefs[0].primary_topic, "home espresso");
    assert_eq!(briefs[0].target_keywords, vec!["espresso machine".to_owned()]);
}

/// Enriches clusters with (stubbed) search-console data and checks the
/// coverage report still sees the original topics.
#[test]
fn test_enrich_then_coverage_flow() {
    let enhanced = SearchConsoleClient::new("credentials.json").enhance_clusters(
        demo_clusters(),
        "https://example.com",
        90,
    );

    for cluster in &enhanced {
        let perf = cluster
            .gsc_performance
            .as_ref()
            .expect("Enrichment attaches performance to every cluster");
        assert_eq!(perf.total_impressions, 0, "Stubbed fetch yields zeros");
    }

    let report = AuthorityAnalyzer::new().coverage(&enhanced);
    assert_eq!(
        report.covered_topics,
        vec!["home espresso".to_owned(), "pour over".to_owned()]
    );
    assert_eq!(report.coverage_depth.get("home espresso"), Some(&3));
    assert!(report.missing_subtopics.is_empty());
}

/// Expands clusters with mock backends and verifies ordering and dedupe
/// across sources.
#[tokio::test]
async fn test_expansion_with_mock_backends() {
    let vectors = VectorStore::from_entries([
        ("espresso", vec![1.0, 0.0, 0.1]),
        ("ristretto", vec![0.95, 0.02, 0.1]),
        ("lungo", vec![0.9, 0.05, 0.1]),
    ])
    .expect("Vector store should build");

    let chat = MockChat::new().with_completion("espresso", "ristretto\ncrema\nespresso beans");
    let engine = ExpansionEngine::new()
        .with_vectors(vectors)
        .with_chat(Arc::new(chat))
        .with_similar_terms(2);

    let mut clusters = HashMap::new();
    clusters.insert(1_u64, vec!["espresso".to_owned(), "crema".to_owned()]);

    let expanded = engine.expand(&clusters).await;
    // Vector neighbours first; the chat's duplicate "ristretto" and the
    // existing "crema" are dropped.
    assert_eq!(
        expanded[&1],
        vec![
            "ristretto".to_owned(),
            "lungo".to_owned(),
            "espresso beans".to_owned(),
        ]
    );
}

/// Classifies intent from SERP payloads and extracts entities from the
/// same keyword set, without any live service.
#[test]
fn test_intent_and_entities_offline() {
    assert_eq!(
        IntentAnalyzer::classify_serp(&SerpData::default()),
        Intent::Informational,
        "An empty SERP degrades to informational"
    );

    let analyzer = EntityAnalyzer::with_rule_tagger();
    let collection = analyzer.extract(&[
        "Rancilio Group espresso machines".to_owned(),
        "cafes in Berlin".to_owned(),
    ]);
    assert_eq!(collection.organizations.len(), 1);
    assert_eq!(collection.locations.len(), 1);

    let graph = EntityAnalyzer::relationship_graph(&collection);
    assert_eq!(graph.node_count(), collection.total());
    assert_eq!(graph.edge_count(), 0);
}
