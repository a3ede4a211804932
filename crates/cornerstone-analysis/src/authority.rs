//! Topical-coverage reporting and content-brief generation.

use std::collections::BTreeMap;

use serde::Serialize;

use cornerstone_core::KeywordCluster;

/// Content type suggested for every gap while the suggester is a
/// placeholder.
const DEFAULT_CONTENT_TYPE: &str = "article";
/// Priority assigned to every gap while the scorer is a placeholder.
const DEFAULT_PRIORITY: f64 = 1.0;

/// A topic the site does not cover yet.
#[derive(Debug, Clone, Serialize)]
pub struct TopicGap {
    /// The uncovered topic.
    pub topic: String,
    /// Keywords associated with the uncovered topic.
    pub related_keywords: Vec<String>,
}

/// A concrete piece of content worth creating.
#[derive(Debug, Clone, Serialize)]
pub struct ContentOpportunity {
    /// Topic the content should cover.
    pub topic: String,
    /// Suggested content format.
    pub suggested_content_type: String,
    /// Relative priority of this opportunity.
    pub priority_score: f64,
    /// Keywords supporting the opportunity.
    pub supporting_keywords: Vec<String>,
}

/// Topical-coverage summary across a set of clusters.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    /// Each cluster's main topic, in input order.
    pub covered_topics: Vec<String>,
    /// Total keyword count per topic, across all of its clusters.
    pub coverage_depth: BTreeMap<String, usize>,
    /// Uncovered subtopics. Empty while gap detection is a placeholder.
    pub missing_subtopics: Vec<TopicGap>,
    /// Opportunities derived from the gaps above.
    pub content_opportunities: Vec<ContentOpportunity>,
}

/// Writing brief distilled from one cluster.
#[derive(Debug, Clone, Serialize)]
pub struct ContentBrief {
    /// The cluster's main topic.
    pub primary_topic: String,
    /// Keywords the content should target.
    pub target_keywords: Vec<String>,
    /// Supporting semantic keywords.
    pub semantic_keywords: Vec<String>,
    /// Suggested outline. Placeholder: always empty.
    pub content_structure: Vec<String>,
    /// Internal-link suggestions. Placeholder: always empty.
    pub internal_linking_opportunities: Vec<String>,
    /// Featured-snippet targets. Placeholder: always empty.
    pub featured_snippet_opportunities: Vec<String>,
}

/// Analyzes clusters for topical coverage and drafts content briefs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorityAnalyzer;

impl AuthorityAnalyzer {
    /// Creates a new analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Summarizes topical coverage across the given clusters.
    pub fn coverage(&self, clusters: &[KeywordCluster]) -> CoverageReport {
        let missing_subtopics = Self::identify_gaps(clusters);
        let content_opportunities = missing_subtopics
            .iter()
            .map(|gap| ContentOpportunity {
                topic: gap.topic.clone(),
                suggested_content_type: Self::suggest_content_type(gap),
                priority_score: Self::priority(gap),
                supporting_keywords: gap.related_keywords.clone(),
            })
            .collect();

        CoverageReport {
            covered_topics: clusters
                .iter()
                .map(|cluster| cluster.main_topic.clone())
                .collect(),
            coverage_depth: Self::topic_depth(clusters),
            missing_subtopics,
            content_opportunities,
        }
    }

    /// Total keyword count per topic.
    fn topic_depth(clusters: &[KeywordCluster]) -> BTreeMap<String, usize> {
        let mut depth = BTreeMap::new();
        for cluster in clusters {
            *depth.entry(cluster.main_topic.clone()).or_insert(0) += cluster.keywords.len();
        }
        depth
    }

    /// Placeholder for competitor-informed gap detection; returns empty for
    /// any input.
    fn identify_gaps(_clusters: &[KeywordCluster]) -> Vec<TopicGap> {
        Vec::new()
    }

    /// Suggests a content format for a gap. Placeholder: always
    /// [`DEFAULT_CONTENT_TYPE`].
    fn suggest_content_type(_gap: &TopicGap) -> String {
        DEFAULT_CONTENT_TYPE.to_owned()
    }

    /// Scores a gap's priority. Placeholder: always [`DEFAULT_PRIORITY`].
    fn priority(_gap: &TopicGap) -> f64 {
        DEFAULT_PRIORITY
    }

    /// Distills one writing brief per cluster.
    pub fn briefs(&self, clusters: &[KeywordCluster]) -> Vec<ContentBrief> {
        clusters
            .iter()
            .map(|cluster| ContentBrief {
                primary_topic: cluster.main_topic.clone(),
                target_keywords: cluster.representative_keywords.clone(),
                semantic_keywords: cluster.related_terms.clone(),
                content_structure: Self::structure_outline(cluster),
                internal_linking_opportunities: Self::linking_opportunities(cluster),
                featured_snippet_opportunities: Self::snippet_opportunities(cluster),
            })
            .collect()
    }

    /// Placeholder for outline suggestions; returns empty for any input.
    fn structure_outline(_cluster: &KeywordCluster) -> Vec<String> {
        Vec::new()
    }

    /// Placeholder for internal-link discovery; returns empty for any
    /// input.
    fn linking_opportunities(_cluster: &KeywordCluster) -> Vec<String> {
        Vec::new()
    }

    /// Placeholder for featured-snippet targeting; returns empty for any
    /// input.
    fn snippet_opportunities(_cluster: &KeywordCluster) -> Vec<String> {
        Vec::new()
    }
}
