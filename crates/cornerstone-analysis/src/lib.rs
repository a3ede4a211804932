//! Content-analysis modules for the cornerstone SEO toolkit.
//!
//! Each module is a thin analysis layer over the provider crates: content
//! scoring against keyword clusters, entity extraction, search-console
//! enrichment, SERP-based intent classification, semantic keyword expansion,
//! and topical-coverage reporting. Several sub-analyses are intentional
//! placeholders that return neutral values until real detectors land.

/// Topical coverage reports and content briefs.
pub mod authority;
/// Entity extraction and relationship graphs.
pub mod entity;
/// Semantic keyword expansion.
pub mod expansion;
/// SERP-based search-intent classification.
pub mod intent;
/// Content scoring against keyword clusters.
pub mod optimizer;
/// Search-console cluster enrichment.
pub mod search_console;

pub use authority::{AuthorityAnalyzer, ContentBrief, ContentOpportunity, CoverageReport, TopicGap};
pub use entity::{EntityAnalyzer, EntityCollection, EntityGraph, EntityMention, EntityNode, RuleTagger};
pub use expansion::ExpansionEngine;
pub use intent::{IntentAnalyzer, IntentReport, IntentSignals, SerpFeatures};
pub use optimizer::{ContentOptimizer, ContentReport, OptimizationSuggestions, ScoreBreakdown};
pub use search_console::{PerformanceSeries, QueryStat, SearchConsoleClient};
