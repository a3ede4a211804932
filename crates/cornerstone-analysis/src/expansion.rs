//! Expands keyword clusters with semantically related terms.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use cornerstone_core::ChatModel;
use cornerstone_vectors::VectorStore;

/// Default number of vector neighbours requested per concept.
const DEFAULT_SIMILAR_TERMS: usize = 5;

/// Candidate expansions grouped by source, merged in declaration order.
#[derive(Debug, Clone, Default)]
struct ExpansionSources {
    /// Nearest terms from the word-vector store.
    vector_similar: Vec<String>,
    /// Related keywords suggested by the chat model.
    chat_related: Vec<String>,
    /// Search-suggest candidates. Placeholder: always empty.
    search_suggest: Vec<String>,
    /// Related knowledge-graph entities. Placeholder: always empty.
    related_entities: Vec<String>,
}

impl ExpansionSources {
    /// Iterates all candidates in fixed source order.
    fn in_order(&self) -> impl Iterator<Item = &String> {
        self.vector_similar
            .iter()
            .chain(&self.chat_related)
            .chain(&self.search_suggest)
            .chain(&self.related_entities)
    }
}

/// Suggests related keywords via word vectors and a chat model.
///
/// Both backends are optional; a missing backend simply contributes no
/// candidates, and a failing chat call degrades to none with a warning.
pub struct ExpansionEngine {
    /// Optional chat model for AI-suggested keywords.
    chat: Option<Arc<dyn ChatModel>>,
    /// Optional word-vector store for neighbour lookups.
    vectors: Option<VectorStore>,
    /// Vector neighbours requested per concept.
    similar_terms: usize,
}

impl Default for ExpansionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpansionEngine {
    /// Creates an engine with no backends; every expansion is empty until
    /// one is attached.
    pub fn new() -> Self {
        Self {
            chat: None,
            vectors: None,
            similar_terms: DEFAULT_SIMILAR_TERMS,
        }
    }

    /// Attaches a chat model.
    #[must_use]
    pub fn with_chat(mut self, chat: Arc<dyn ChatModel>) -> Self {
        self.chat = Some(chat);
        self
    }

    /// Attaches a word-vector store.
    #[must_use]
    pub fn with_vectors(mut self, vectors: VectorStore) -> Self {
        self.vectors = Some(vectors);
        self
    }

    /// Sets how many vector neighbours to request per concept.
    #[must_use]
    pub fn with_similar_terms(mut self, count: usize) -> Self {
        self.similar_terms = count;
        self
    }

    /// Expands every cluster, returning new keywords per cluster id.
    ///
    /// The expansion seed is the cluster's first keyword; a cluster with no
    /// keywords expands to nothing.
    pub async fn expand(
        &self,
        cluster_keywords: &HashMap<u64, Vec<String>>,
    ) -> HashMap<u64, Vec<String>> {
        let mut expanded = HashMap::with_capacity(cluster_keywords.len());

        for (cluster_id, keywords) in cluster_keywords {
            let candidates = match keywords.first() {
                Some(concept) => {
                    let sources = self.gather(concept).await;
                    Self::rank(&sources, keywords)
                }
                None => Vec::new(),
            };
            expanded.insert(*cluster_id, candidates);
        }

        expanded
    }

    /// Collects candidates from every source for one core concept.
    async fn gather(&self, concept: &str) -> ExpansionSources {
        ExpansionSources {
            vector_similar: self.vector_similar(concept),
            chat_related: self.chat_related(concept).await,
            search_suggest: Self::search_suggestions(concept),
            related_entities: Self::related_entities(concept),
        }
    }

    /// Nearest vector-store terms for the concept; empty without a store.
    fn vector_similar(&self, concept: &str) -> Vec<String> {
        self.vectors.as_ref().map_or_else(Vec::new, |store| {
            store
                .most_similar(concept, self.similar_terms)
                .into_iter()
                .map(|(term, _score)| term)
                .collect()
        })
    }

    /// Chat-suggested keywords for the concept; empty without a model, or
    /// on failure.
    async fn chat_related(&self, concept: &str) -> Vec<String> {
        let Some(chat) = self.chat.as_ref() else {
            return Vec::new();
        };

        let prompt = format!("List related keywords for {concept}");
        match chat.complete(&prompt).await {
            Ok(text) => text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_owned)
                .collect(),
            Err(err) => {
                tracing::warn!("chat expansion for {concept:?} failed: {err}");
                Vec::new()
            }
        }
    }

    /// Placeholder for a search-suggest source; returns empty for any
    /// input.
    fn search_suggestions(_concept: &str) -> Vec<String> {
        Vec::new()
    }

    /// Placeholder for a knowledge-graph source; returns empty for any
    /// input.
    fn related_entities(_concept: &str) -> Vec<String> {
        Vec::new()
    }

    /// Placeholder for latent-semantic-indexing suggestions; returns empty
    /// for any input.
    pub fn lsi_suggestions(&self, _primary_keyword: &str) -> Vec<String> {
        Vec::new()
    }

    /// Merges candidates in source order, dropping duplicates and terms the
    /// cluster already has, preserving first-seen order.
    fn rank(sources: &ExpansionSources, existing: &[String]) -> Vec<String> {
        let mut seen: HashSet<String> = existing.iter().cloned().collect();
        let mut ranked = Vec::new();

        for candidate in sources.in_order() {
            if seen.insert(candidate.clone()) {
                ranked.push(candidate.clone());
            }
        }

        ranked
    }
}
