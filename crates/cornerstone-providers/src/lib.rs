//! HTTP façades over the external services the analysis modules consume.
//!
//! Every wrapper follows the same degradation policy: transport and parse
//! failures are logged as warnings and collapse to an empty or default
//! payload, never to a caller-visible error.

/// Mock chat model for testing expansion flows.
pub mod mock;
/// `OpenAI` chat-completions model.
pub mod openai;
/// `SerpApi` SERP data fetches.
pub mod serpapi;
/// Wikidata knowledge-graph lookups.
pub mod wikidata;

pub use mock::MockChat;
pub use openai::OpenAiChat;
pub use serpapi::{SerpApiClient, SerpData};
pub use wikidata::{WikidataClient, WikidataEntity};
