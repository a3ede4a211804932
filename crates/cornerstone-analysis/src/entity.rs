//! Extracts entities from keyword lists and builds relationship graphs.

use petgraph::graph::UnGraph;
use regex::Regex;
use serde::Serialize;

use cornerstone_core::{EntityLabel, EntityTagger, TaggedEntity};
use cornerstone_providers::{WikidataClient, WikidataEntity};

/// Capitalized span: one or more capitalized words in sequence.
const CAPITALIZED_SPAN: &str = r"\b[A-Z][A-Za-z]*(?:\s+[A-Z][A-Za-z]*)*";

/// Undirected graph of entity mentions; edge discovery is not implemented
/// yet, so graphs carry nodes only.
pub type EntityGraph = UnGraph<EntityNode, ()>;

/// One node in an entity relationship graph.
#[derive(Debug, Clone, Serialize)]
pub struct EntityNode {
    /// The entity's text.
    pub text: String,
    /// The bucket the entity was filed under.
    pub category: String,
}

/// One extracted entity mention.
#[derive(Debug, Clone, Serialize)]
pub struct EntityMention {
    /// The matched text span.
    pub text: String,
    /// Tagger confidence in [0, 1].
    pub confidence: f64,
    /// Keywords the mention was found in.
    pub context_keywords: Vec<String>,
}

/// Extracted entities bucketed by category.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EntityCollection {
    /// People.
    pub persons: Vec<EntityMention>,
    /// Companies and institutions.
    pub organizations: Vec<EntityMention>,
    /// Geographic and political locations.
    pub locations: Vec<EntityMention>,
    /// Abstract concepts.
    pub concepts: Vec<EntityMention>,
    /// Products and services.
    pub products: Vec<EntityMention>,
    /// Everything that fits no other bucket.
    pub topics: Vec<EntityMention>,
}

impl EntityCollection {
    /// Returns the bucket a label files into.
    fn bucket_mut(&mut self, label: EntityLabel) -> &mut Vec<EntityMention> {
        match label {
            EntityLabel::Person => &mut self.persons,
            EntityLabel::Organization => &mut self.organizations,
            EntityLabel::Location => &mut self.locations,
            EntityLabel::Concept => &mut self.concepts,
            EntityLabel::Product => &mut self.products,
            EntityLabel::Topic => &mut self.topics,
        }
    }

    /// Total number of mentions across all buckets.
    pub fn total(&self) -> usize {
        self.persons.len()
            + self.organizations.len()
            + self.locations.len()
            + self.concepts.len()
            + self.products.len()
            + self.topics.len()
    }

    /// Whether no mentions were extracted.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterates buckets in a fixed order as `(bucket name, mentions)` pairs.
    fn buckets(&self) -> [(&'static str, &Vec<EntityMention>); 6] {
        [
            ("persons", &self.persons),
            ("organizations", &self.organizations),
            ("locations", &self.locations),
            ("concepts", &self.concepts),
            ("products", &self.products),
            ("topics", &self.topics),
        ]
    }
}

/// Extracts entities from keyword lists and maps simple relationships.
///
/// The tagger is optional: without one, extraction returns empty buckets
/// rather than failing, mirroring the degradation policy of the provider
/// wrappers.
pub struct EntityAnalyzer {
    /// Optional entity tagger; `None` disables extraction.
    tagger: Option<Box<dyn EntityTagger>>,
    /// Knowledge-graph client for entity lookups.
    knowledge_graph: WikidataClient,
}

impl EntityAnalyzer {
    /// Creates an analyzer with the given tagger, or a disabled one for
    /// `None`.
    pub fn new(tagger: Option<Box<dyn EntityTagger>>) -> Self {
        if tagger.is_none() {
            tracing::warn!("no entity tagger installed - entity extraction disabled");
        }
        Self {
            tagger,
            knowledge_graph: WikidataClient::new(),
        }
    }

    /// Creates an analyzer with the built-in rule-based tagger.
    pub fn with_rule_tagger() -> Self {
        Self::new(Some(Box::new(RuleTagger::new())))
    }

    /// Sets the knowledge-graph client.
    #[must_use]
    pub fn with_knowledge_graph(mut self, client: WikidataClient) -> Self {
        self.knowledge_graph = client;
        self
    }

    /// Extracts entities from a list of keywords into labeled buckets.
    ///
    /// Returns empty buckets when no tagger is installed.
    pub fn extract(&self, keywords: &[String]) -> EntityCollection {
        let mut collection = EntityCollection::default();
        let Some(tagger) = self.tagger.as_deref() else {
            return collection;
        };

        for keyword in keywords {
            for TaggedEntity {
                text,
                label,
                confidence,
            } in tagger.tag(keyword)
            {
                collection.bucket_mut(label).push(EntityMention {
                    text,
                    confidence,
                    context_keywords: vec![keyword.clone()],
                });
            }
        }

        collection
    }

    /// Builds the relationship graph for an extracted collection: one node
    /// per mention, categorized by bucket. Edge discovery is a future
    /// concern; graphs currently carry no edges.
    pub fn relationship_graph(collection: &EntityCollection) -> EntityGraph {
        let mut graph = EntityGraph::new_undirected();
        for (category, mentions) in collection.buckets() {
            for mention in mentions {
                graph.add_node(EntityNode {
                    text: mention.text.clone(),
                    category: category.to_owned(),
                });
            }
        }
        graph
    }

    /// Looks a term up in the knowledge graph, degrading to empty on
    /// failure.
    pub async fn lookup(&self, term: &str) -> Vec<WikidataEntity> {
        self.knowledge_graph.search(term).await
    }
}

/// Small rule-based tagger over capitalized spans.
///
/// Far from a real NER model, but enough to exercise the bucket plumbing:
/// organization suffixes and a location gazetteer are checked first, then
/// multi-word capitalized spans are treated as person names and single
/// words as topics.
pub struct RuleTagger {
    /// Matches capitalized word sequences.
    spans: Regex,
}

/// Suffix tokens that mark a span as an organization.
const ORG_SUFFIXES: &[&str] = &["Inc", "Corp", "Ltd", "LLC", "GmbH", "Company", "Labs", "Group"];

/// Minimal location gazetteer for the rule tagger.
const LOCATIONS: &[&str] = &[
    "London", "Paris", "Berlin", "Tokyo", "New York", "California", "Europe", "America", "Asia",
];

impl RuleTagger {
    /// Creates the tagger with its compiled span pattern.
    pub fn new() -> Self {
        #[allow(clippy::expect_used, reason = "pattern is static and known valid")]
        let spans = Regex::new(CAPITALIZED_SPAN).expect("capitalized-span pattern");
        Self { spans }
    }

    /// Classifies one capitalized span.
    fn classify(span: &str) -> (EntityLabel, f64) {
        if ORG_SUFFIXES
            .iter()
            .any(|suffix| span.ends_with(suffix) && span.len() > suffix.len())
        {
            return (EntityLabel::Organization, 0.9);
        }
        if LOCATIONS.contains(&span) {
            return (EntityLabel::Location, 0.9);
        }
        if span.split_whitespace().count() > 1 {
            return (EntityLabel::Person, 0.7);
        }
        (EntityLabel::Topic, 0.5)
    }
}

impl Default for RuleTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityTagger for RuleTagger {
    fn name(&self) -> &'static str {
        "rule-tagger"
    }

    fn tag(&self, text: &str) -> Vec<TaggedEntity> {
        self.spans
            .find_iter(text)
            .map(|span| {
                let (label, confidence) = Self::classify(span.as_str());
                TaggedEntity {
                    text: span.as_str().to_owned(),
                    label,
                    confidence,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(list: &[&str]) -> Vec<String> {
        list.iter().map(|keyword| (*keyword).to_owned()).collect()
    }

    /// Tests that a missing tagger yields empty buckets for any input.
    #[test]
    fn test_extract_without_tagger_is_empty() {
        let analyzer = EntityAnalyzer::new(None);
        let collection = analyzer.extract(&keywords(&["Ada Lovelace at Acme Corp in London"]));

        assert!(collection.is_empty(), "No tagger means no entities");
        assert_eq!(collection.total(), 0);
    }

    /// Tests bucket routing through the rule tagger.
    #[test]
    fn test_extract_buckets_entities() {
        let analyzer = EntityAnalyzer::with_rule_tagger();
        let collection = analyzer.extract(&keywords(&[
            "visit London soon",
            "shoes by Acme Corp",
            "interview with Ada Lovelace",
        ]));

        assert_eq!(collection.locations.len(), 1);
        assert_eq!(collection.locations[0].text, "London");
        assert_eq!(collection.organizations.len(), 1);
        assert_eq!(collection.organizations[0].text, "Acme Corp");
        assert_eq!(collection.persons.len(), 1);
        assert_eq!(collection.persons[0].text, "Ada Lovelace");
    }

    /// Tests that mentions carry their source keyword as context.
    #[test]
    fn test_extract_context_keywords() {
        let analyzer = EntityAnalyzer::with_rule_tagger();
        let collection = analyzer.extract(&keywords(&["trip to Paris"]));

        assert_eq!(collection.locations.len(), 1);
        assert_eq!(
            collection.locations[0].context_keywords,
            vec!["trip to Paris".to_owned()]
        );
    }

    /// Tests the rule tagger's classification heuristics directly.
    #[test]
    fn test_rule_tagger_classification() {
        let tagger = RuleTagger::new();

        let tags = tagger.tag("Initech Labs ships from Berlin");
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].text, "Initech Labs");
        assert_eq!(tags[0].label, EntityLabel::Organization);
        assert_eq!(tags[1].text, "Berlin");
        assert_eq!(tags[1].label, EntityLabel::Location);

        let tags = tagger.tag("best price for Widgets");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].label, EntityLabel::Topic);

        assert!(tagger.tag("all lowercase text").is_empty());
    }

    /// Tests that the relationship graph carries one node per mention and
    /// no edges.
    #[test]
    fn test_relationship_graph_nodes_only() {
        let analyzer = EntityAnalyzer::with_rule_tagger();
        let collection = analyzer.extract(&keywords(&["visit London", "visit Paris"]));

        let graph = EntityAnalyzer::relationship_graph(&collection);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);

        let categories: Vec<&str> = graph
            .node_weights()
            .map(|node| node.category.as_str())
            .collect();
        assert!(categories.iter().all(|category| *category == "locations"));
    }
}
