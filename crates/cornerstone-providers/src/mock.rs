//! Mock chat model for testing keyword-expansion flows.
//!
//! Allows defining canned completions for specific prompts, enabling
//! end-to-end testing of expansion workflows without real API calls.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use cornerstone_core::{ChatModel, Error, Result};

/// Locks a mutex, recovering the inner value if a test thread poisoned it.
fn lock_ignoring_poison<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Chat model that returns pre-defined completions based on prompt patterns.
///
/// Useful for testing expansion workflows end-to-end without making real
/// API calls.
#[derive(Clone, Default)]
pub struct MockChat {
    /// Predefined completions keyed by prompt pattern.
    completions: Arc<Mutex<HashMap<String, String>>>,
    /// Default completion if no pattern matches.
    fallback: Arc<Mutex<Option<String>>>,
    /// Error message every completion fails with, when set.
    failure: Arc<Mutex<Option<String>>>,
    /// Prompt history for verification.
    prompt_history: Arc<Mutex<Vec<String>>>,
}

impl MockChat {
    /// Creates a new mock chat model with no canned completions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pattern-based completion.
    #[must_use]
    pub fn with_completion(self, pattern: impl Into<String>, completion: impl Into<String>) -> Self {
        {
            let mut completions = lock_ignoring_poison(&self.completions);
            completions.insert(pattern.into(), completion.into());
        }
        self
    }

    /// Sets a fallback completion for prompts that match no pattern.
    #[must_use]
    pub fn with_fallback(self, completion: impl Into<String>) -> Self {
        {
            let mut fallback = lock_ignoring_poison(&self.fallback);
            *fallback = Some(completion.into());
        }
        self
    }

    /// Makes every completion fail with a provider error carrying the
    /// given message, for exercising degraded paths.
    #[must_use]
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        {
            let mut failure = lock_ignoring_poison(&self.failure);
            *failure = Some(message.into());
        }
        self
    }

    /// Returns every prompt sent to this model, in order.
    pub fn prompt_history(&self) -> Vec<String> {
        lock_ignoring_poison(&self.prompt_history).clone()
    }

    /// Returns the number of prompts sent to this model.
    pub fn prompt_count(&self) -> usize {
        lock_ignoring_poison(&self.prompt_history).len()
    }

    /// Finds a matching completion for the given prompt.
    fn find_completion(&self, prompt: &str) -> Option<String> {
        let completions = lock_ignoring_poison(&self.completions);

        // Exact match wins over substring match.
        if let Some(completion) = completions.get(prompt) {
            return Some(completion.clone());
        }

        completions
            .iter()
            .find(|(pattern, _)| prompt.contains(pattern.as_str()))
            .map(|(_, completion)| completion.clone())
    }
}

#[async_trait]
impl ChatModel for MockChat {
    fn name(&self) -> &'static str {
        "mock-chat"
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        {
            let mut history = lock_ignoring_poison(&self.prompt_history);
            history.push(prompt.to_owned());
        }

        if let Some(message) = lock_ignoring_poison(&self.failure).clone() {
            return Err(Error::Provider(message));
        }

        let text = self.find_completion(prompt).unwrap_or_else(|| {
            let fallback = lock_ignoring_poison(&self.fallback);
            fallback
                .clone()
                .unwrap_or_else(|| format!("Mock completion for prompt: {prompt}"))
        });

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests exact prompt matching.
    #[tokio::test]
    async fn test_mock_chat_exact_match() {
        let chat = MockChat::new().with_completion("coffee", "espresso\nlatte");

        let response = chat.complete("coffee").await;
        assert!(response.is_ok(), "Mock completion should succeed");
        if let Ok(text) = response {
            assert_eq!(text, "espresso\nlatte");
        }
    }

    /// Tests substring prompt matching.
    #[tokio::test]
    async fn test_mock_chat_substring_match() {
        let chat = MockChat::new().with_completion("running shoes", "trail runners");

        let response = chat
            .complete("List related keywords for running shoes")
            .await;
        assert!(response.is_ok(), "Mock completion should succeed");
        if let Ok(text) = response {
            assert_eq!(text, "trail runners");
        }
    }

    /// Tests the fallback completion path.
    #[tokio::test]
    async fn test_mock_chat_fallback() {
        let chat = MockChat::new().with_fallback("nothing specific");

        let response = chat.complete("unmatched prompt").await;
        assert!(response.is_ok(), "Mock completion should succeed");
        if let Ok(text) = response {
            assert_eq!(text, "nothing specific");
        }
    }

    /// Tests that an injected failure turns every completion into an error
    /// while prompts are still recorded.
    #[tokio::test]
    async fn test_mock_chat_failure() {
        let chat = MockChat::new()
            .with_completion("coffee", "espresso")
            .with_failure("model offline");

        let response = chat.complete("coffee").await;
        assert!(response.is_err(), "Injected failure should surface");
        if let Err(err) = response {
            assert!(
                matches!(err, Error::Provider(_)),
                "Failure should be a provider error"
            );
        }
        assert_eq!(chat.prompt_count(), 1, "Failed prompts are still recorded");
    }

    /// Tests prompt-history tracking.
    #[tokio::test]
    async fn test_mock_chat_prompt_history() {
        let chat = MockChat::new();

        let first = chat.complete("first prompt").await;
        assert!(first.is_ok(), "First completion should succeed");
        let second = chat.complete("second prompt").await;
        assert!(second.is_ok(), "Second completion should succeed");

        let history = chat.prompt_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], "first prompt");
        assert_eq!(history[1], "second prompt");
        assert_eq!(chat.prompt_count(), 2);
    }
}
