//! Scores content against a target keyword cluster.

use serde::Serialize;

use cornerstone_core::KeywordCluster;

/// Word count at which the depth score saturates.
const DEPTH_SATURATION_WORDS: f64 = 1000.0;

/// The four sub-scores behind an overall content score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    /// Fraction of cluster keywords present in the content.
    pub keyword_coverage: f64,
    /// Length-based depth proxy, saturating at [`DEPTH_SATURATION_WORDS`] words.
    pub semantic_depth: f64,
    /// Placeholder; always 0.0 until an entity-coverage detector lands.
    pub entity_coverage: f64,
    /// Placeholder; always 0.0 until a completeness detector lands.
    pub topical_completeness: f64,
}

impl ScoreBreakdown {
    /// Unweighted arithmetic mean of the four sub-scores.
    pub fn mean(&self) -> f64 {
        (self.keyword_coverage
            + self.semantic_depth
            + self.entity_coverage
            + self.topical_completeness)
            / 4.0
    }
}

/// Concrete suggestions for improving a piece of content.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OptimizationSuggestions {
    /// Cluster keywords the content does not mention.
    pub missing_keywords: Vec<String>,
    /// Placeholder; always empty until a gap detector lands.
    pub semantic_gaps: Vec<String>,
    /// Placeholder; always empty until a structure analyzer lands.
    pub structure_improvements: Vec<String>,
    /// Placeholder; always empty until a link suggester lands.
    pub internal_linking: Vec<String>,
}

/// Full scoring report for one piece of content against one cluster.
#[derive(Debug, Clone, Serialize)]
pub struct ContentReport {
    /// Mean of the four detailed sub-scores.
    pub overall_score: f64,
    /// The individual sub-scores.
    pub detailed_scores: ScoreBreakdown,
    /// Improvement suggestions derived from the same pass.
    pub suggestions: OptimizationSuggestions,
}

/// Scores content for semantic relevance to a target cluster.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentOptimizer;

impl ContentOptimizer {
    /// Creates a new optimizer.
    pub fn new() -> Self {
        Self
    }

    /// Scores `content` against `cluster` and collects suggestions.
    pub fn score(&self, content: &str, cluster: &KeywordCluster) -> ContentReport {
        let detailed_scores = ScoreBreakdown {
            keyword_coverage: Self::keyword_coverage(content, cluster),
            semantic_depth: Self::semantic_depth(content),
            entity_coverage: Self::entity_coverage(content, cluster),
            topical_completeness: Self::topical_completeness(content, cluster),
        };

        let suggestions = OptimizationSuggestions {
            missing_keywords: Self::missing_keywords(content, cluster),
            semantic_gaps: Self::semantic_gaps(content, cluster),
            structure_improvements: Self::structure_improvements(content),
            internal_linking: Self::internal_linking(content, cluster),
        };

        ContentReport {
            overall_score: detailed_scores.mean(),
            detailed_scores,
            suggestions,
        }
    }

    /// Fraction of cluster keywords found case-insensitively in the content.
    ///
    /// An empty keyword list scores 0.0.
    fn keyword_coverage(content: &str, cluster: &KeywordCluster) -> f64 {
        if cluster.keywords.is_empty() {
            return 0.0;
        }

        let haystack = content.to_lowercase();
        let found = cluster
            .keywords
            .iter()
            .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
            .count();

        found as f64 / cluster.keywords.len() as f64
    }

    /// Length-based depth proxy: word count over the saturation point,
    /// clamped to 1.0.
    fn semantic_depth(content: &str) -> f64 {
        (content.split_whitespace().count() as f64 / DEPTH_SATURATION_WORDS).min(1.0)
    }

    /// Placeholder for entity-coverage scoring; returns 0.0 for any input.
    fn entity_coverage(_content: &str, _cluster: &KeywordCluster) -> f64 {
        0.0
    }

    /// Placeholder for topic-completeness scoring; returns 0.0 for any input.
    fn topical_completeness(_content: &str, _cluster: &KeywordCluster) -> f64 {
        0.0
    }

    /// Cluster keywords absent case-insensitively from the content, in
    /// cluster order.
    fn missing_keywords(content: &str, cluster: &KeywordCluster) -> Vec<String> {
        let haystack = content.to_lowercase();
        cluster
            .keywords
            .iter()
            .filter(|keyword| !haystack.contains(&keyword.to_lowercase()))
            .cloned()
            .collect()
    }

    /// Placeholder for semantic-gap detection; returns empty for any input.
    fn semantic_gaps(_content: &str, _cluster: &KeywordCluster) -> Vec<String> {
        Vec::new()
    }

    /// Placeholder for structure suggestions; returns empty for any input.
    fn structure_improvements(_content: &str) -> Vec<String> {
        Vec::new()
    }

    /// Placeholder for internal-link suggestions; returns empty for any input.
    fn internal_linking(_content: &str, _cluster: &KeywordCluster) -> Vec<String> {
        Vec::new()
    }
}
