use async_trait::async_trait;

use crate::{Result, TaggedEntity};

/// Trait for conversational AI models used to suggest related keywords.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Returns the unique identifier for this model backend.
    fn name(&self) -> &'static str;

    /// Checks whether this backend is currently available.
    async fn is_available(&self) -> bool;

    /// Sends a single prompt and returns the raw completion text.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable, the request fails,
    /// or the response cannot be parsed.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Trait for named-entity taggers applied to keyword text.
///
/// Tagging is optional everywhere it is used: callers hold an
/// `Option<Box<dyn EntityTagger>>` and produce empty results when no tagger
/// is installed.
pub trait EntityTagger: Send + Sync {
    /// Returns the unique identifier for this tagger.
    fn name(&self) -> &'static str;

    /// Returns every entity span recognized in the given text.
    fn tag(&self, text: &str) -> Vec<TaggedEntity>;
}
