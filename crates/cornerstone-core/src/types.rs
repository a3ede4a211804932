use core::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Search intent categories, chosen by simple majority count of SERP signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// The searcher wants to learn something.
    Informational,
    /// The searcher is researching a purchase.
    Commercial,
    /// The searcher wants to buy.
    Transactional,
    /// The searcher is looking for a specific site or brand.
    Navigational,
}

impl Intent {
    /// Returns the lowercase identifier used in reports and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Informational => "informational",
            Self::Commercial => "commercial",
            Self::Transactional => "transactional",
            Self::Navigational => "navigational",
        }
    }
}

impl Display for Intent {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(self.as_str())
    }
}

/// A group of keywords sharing a topic label.
///
/// Cluster inputs arrive as loose JSON produced by upstream tooling, so every
/// field defaults when absent rather than failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordCluster {
    /// Topic label shared by the cluster's keywords.
    #[serde(default)]
    pub main_topic: String,
    /// All keywords assigned to the cluster.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// The keywords chosen to represent the cluster.
    #[serde(default)]
    pub representative_keywords: Vec<String>,
    /// Semantically related terms discovered during clustering.
    #[serde(default)]
    pub related_terms: Vec<String>,
    /// Search-console performance attached by cluster enrichment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gsc_performance: Option<GscPerformance>,
}

impl KeywordCluster {
    /// Creates a cluster with the given topic label and no keywords.
    pub fn new<T: Into<String>>(main_topic: T) -> Self {
        Self {
            main_topic: main_topic.into(),
            ..Self::default()
        }
    }

    /// Sets the cluster's keywords.
    #[must_use]
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    /// Sets the cluster's representative keywords.
    #[must_use]
    pub fn with_representative_keywords(mut self, keywords: Vec<String>) -> Self {
        self.representative_keywords = keywords;
        self
    }

    /// Sets the cluster's related terms.
    #[must_use]
    pub fn with_related_terms(mut self, terms: Vec<String>) -> Self {
        self.related_terms = terms;
        self
    }
}

/// Aggregated search-console performance for one cluster.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GscPerformance {
    /// Total impressions across the cluster's keywords.
    pub total_impressions: u64,
    /// Total clicks across the cluster's keywords.
    pub total_clicks: u64,
    /// Mean ranking position, 0.0 when no positions were reported.
    pub avg_position: f64,
    /// Mean click-through rate, 0.0 when no rates were reported.
    pub avg_ctr: f64,
    /// Keywords with rising impressions over the window.
    pub trending_keywords: Vec<String>,
    /// Keywords ranking well but converting poorly.
    pub underperforming_keywords: Vec<String>,
}

/// Label assigned to a recognized entity span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityLabel {
    /// A person's name.
    Person,
    /// A company or institution.
    Organization,
    /// A geographic or political location.
    Location,
    /// A product or service name.
    Product,
    /// An abstract concept.
    Concept,
    /// Anything that fits none of the above.
    Topic,
}

/// An entity span recognized in keyword text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggedEntity {
    /// The matched text span.
    pub text: String,
    /// The label the tagger assigned.
    pub label: EntityLabel,
    /// Tagger confidence in [0, 1]; rule-based taggers report 1.0.
    pub confidence: f64,
}

impl TaggedEntity {
    /// Creates a tagged entity with full confidence.
    pub fn new<T: Into<String>>(text: T, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
            confidence: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_str, to_string};

    #[test]
    fn test_intent_display_matches_serde() {
        let serialized = to_string(&Intent::Commercial).unwrap_or_default();
        assert_eq!(serialized, "\"commercial\"");
        assert_eq!(Intent::Commercial.to_string(), "commercial");
    }

    #[test]
    fn test_cluster_builder_chain() {
        let cluster = KeywordCluster::new("running shoes")
            .with_keywords(vec!["trail shoes".to_owned(), "road shoes".to_owned()])
            .with_representative_keywords(vec!["trail shoes".to_owned()])
            .with_related_terms(vec!["cushioning".to_owned()]);

        assert_eq!(cluster.main_topic, "running shoes");
        assert_eq!(cluster.keywords.len(), 2);
        assert_eq!(cluster.representative_keywords.len(), 1);
        assert_eq!(cluster.related_terms, vec!["cushioning".to_owned()]);
        assert!(cluster.gsc_performance.is_none());
    }

    #[test]
    fn test_cluster_permissive_deserialization() {
        // Upstream tools emit partial clusters; missing fields must default.
        let result = from_str::<KeywordCluster>(r#"{"main_topic": "espresso"}"#);
        assert!(result.is_ok(), "Partial cluster JSON should deserialize");
        if let Ok(cluster) = result {
            assert_eq!(cluster.main_topic, "espresso");
            assert!(cluster.keywords.is_empty());
            assert!(cluster.related_terms.is_empty());
        }
    }

    #[test]
    fn test_gsc_performance_default_is_neutral() {
        let perf = GscPerformance::default();
        assert_eq!(perf.total_impressions, 0);
        assert_eq!(perf.total_clicks, 0);
        assert!(perf.avg_position.abs() < f64::EPSILON);
        assert!(perf.trending_keywords.is_empty());
    }

    #[test]
    fn test_tagged_entity_defaults_full_confidence() {
        let entity = TaggedEntity::new("Acme Corp", EntityLabel::Organization);
        assert_eq!(entity.text, "Acme Corp");
        assert!((entity.confidence - 1.0).abs() < f64::EPSILON);
    }
}
