//! Classifies search intent from SERP result composition.

use serde::Serialize;

use cornerstone_core::Intent;
use cornerstone_providers::{SerpApiClient, SerpData};

/// Raw intent signal counts taken from one SERP.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct IntentSignals {
    /// Featured-snippet presence (0 or 1).
    pub informational: usize,
    /// Number of comparison results.
    pub commercial: usize,
    /// Number of shopping results.
    pub transactional: usize,
    /// Number of organic results.
    pub navigational: usize,
}

impl IntentSignals {
    /// Counts signals from a SERP payload.
    pub fn from_serp(data: &SerpData) -> Self {
        Self {
            informational: usize::from(data.has_featured_snippet()),
            commercial: data.comparison_results.len(),
            transactional: data.shopping_results.len(),
            navigational: data.organic_results.len(),
        }
    }

    /// The intent with the highest raw count.
    ///
    /// Ties break in the fixed order informational, commercial,
    /// transactional, navigational. No smoothing or normalization is
    /// applied; an all-zero SERP therefore classifies as informational.
    pub fn refined(&self) -> Intent {
        let ordered = [
            (Intent::Informational, self.informational),
            (Intent::Commercial, self.commercial),
            (Intent::Transactional, self.transactional),
            (Intent::Navigational, self.navigational),
        ];

        let mut best = ordered[0];
        for candidate in &ordered[1..] {
            if candidate.1 > best.1 {
                best = *candidate;
            }
        }
        best.0
    }
}

/// Notable SERP features surfaced alongside the classification.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SerpFeatures {
    /// Whether a featured snippet was shown.
    pub featured_snippet: bool,
    /// Number of people-also-ask entries.
    pub people_also_ask: usize,
    /// Number of shopping results.
    pub shopping_results: usize,
    /// Whether a local pack was shown.
    pub local_pack: bool,
    /// Whether a knowledge panel was shown.
    pub knowledge_panel: bool,
}

impl SerpFeatures {
    /// Summarizes the notable features of a SERP payload.
    pub fn from_serp(data: &SerpData) -> Self {
        Self {
            featured_snippet: data.has_featured_snippet(),
            people_also_ask: data.people_also_ask.len(),
            shopping_results: data.shopping_results.len(),
            local_pack: data.has_local_pack(),
            knowledge_panel: data.has_knowledge_panel(),
        }
    }
}

/// Full classification output for one keyword.
#[derive(Debug, Clone, Serialize)]
pub struct IntentReport {
    /// The analyzed keyword.
    pub keyword: String,
    /// The refined intent.
    pub intent: Intent,
    /// The raw signal counts behind the classification.
    pub signals: IntentSignals,
    /// Notable SERP features observed.
    pub features: SerpFeatures,
}

/// Analyzes SERP composition to refine search intent.
pub struct IntentAnalyzer {
    /// SERP data source.
    serp: SerpApiClient,
}

impl IntentAnalyzer {
    /// Creates an analyzer over the given SERP client.
    pub fn new(serp: SerpApiClient) -> Self {
        Self { serp }
    }

    /// Classifies a SERP payload without fetching anything.
    pub fn classify_serp(data: &SerpData) -> Intent {
        IntentSignals::from_serp(data).refined()
    }

    /// Fetches the keyword's SERP and classifies its intent.
    ///
    /// A failed fetch degrades to an empty SERP, which classifies as
    /// informational.
    pub async fn classify(&self, keyword: &str) -> Intent {
        let data = self.serp.fetch_or_empty(keyword).await;
        Self::classify_serp(&data)
    }

    /// Fetches the keyword's SERP and reports intent, signals, and
    /// features together.
    pub async fn analyze(&self, keyword: &str) -> IntentReport {
        let data = self.serp.fetch_or_empty(keyword).await;
        IntentReport {
            keyword: keyword.to_owned(),
            intent: Self::classify_serp(&data),
            signals: IntentSignals::from_serp(&data),
            features: SerpFeatures::from_serp(&data),
        }
    }
}
