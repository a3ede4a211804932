use std::env;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use cornerstone_core::{Error, Result};

/// `SerpApi` search endpoint URL.
const SERP_API_URL: &str = "https://serpapi.com/search.json";
/// Env var key for the `SerpApi` key.
const ENV_SERPAPI_API_KEY: &str = "SERPAPI_API_KEY";
/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client for the `SerpApi` search endpoint.
pub struct SerpApiClient {
    /// HTTP client for API requests.
    client: Client,
    /// `SerpApi` API key.
    api_key: String,
    /// Per-request timeout.
    timeout: Duration,
}

impl SerpApiClient {
    /// Creates a new `SerpApiClient` with the given API key.
    ///
    /// # Errors
    /// Returns an error if the provided API key is empty.
    pub fn new(api_key: String) -> Result<Self> {
        if api_key.is_empty() {
            return Err(Error::MissingApiKey(ENV_SERPAPI_API_KEY.to_owned()));
        }

        Ok(Self {
            client: Client::default(),
            api_key,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Creates a new `SerpApiClient` from environment variables.
    ///
    /// # Errors
    /// Returns an error if the env var is missing.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(ENV_SERPAPI_API_KEY)
            .map_err(|_| Error::MissingApiKey(ENV_SERPAPI_API_KEY.to_owned()))?;
        Self::new(api_key)
    }

    /// Creates a new `SerpApiClient` from config or environment.
    ///
    /// # Errors
    /// Returns an error if the API key is not provided.
    pub fn from_config_or_env(config_key: Option<String>) -> Result<Self> {
        let api_key = config_key
            .or_else(|| env::var(ENV_SERPAPI_API_KEY).ok())
            .ok_or_else(|| {
                Error::MissingApiKey(format!(
                    "{ENV_SERPAPI_API_KEY} or config.toml serpapi_api_key"
                ))
            })?;
        Self::new(api_key)
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetches SERP data for a keyword.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the service answers with a
    /// non-success status, or the body cannot be parsed.
    pub async fn fetch(&self, keyword: &str) -> Result<SerpData> {
        let response = self
            .client
            .get(SERP_API_URL)
            .query(&[("q", keyword), ("api_key", self.api_key.as_str())])
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Error::Provider(format!(
                "SERP API request failed with status {status}"
            )));
        }

        response
            .json::<SerpData>()
            .await
            .map_err(|err| Error::InvalidResponse(format!("Failed to parse SERP data: {err}")))
    }

    /// Fetches SERP data, degrading to an empty payload on any failure.
    ///
    /// The failure is logged as a warning; callers cannot distinguish an
    /// unreachable service from a keyword with no results.
    pub async fn fetch_or_empty(&self, keyword: &str) -> SerpData {
        match self.fetch(keyword).await {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!("SERP fetch for {keyword:?} failed: {err}");
                SerpData::default()
            }
        }
    }
}

/// SERP payload, deserialized permissively.
///
/// Only the result blocks the analyzers count are typed; everything the
/// service adds beyond them is ignored, and every field defaults when
/// absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SerpData {
    /// Featured-snippet block, when one was shown.
    #[serde(default)]
    pub featured_snippet: Option<Value>,
    /// Organic result entries.
    #[serde(default)]
    pub organic_results: Vec<Value>,
    /// Shopping result entries.
    #[serde(default)]
    pub shopping_results: Vec<Value>,
    /// Comparison result entries.
    #[serde(default)]
    pub comparison_results: Vec<Value>,
    /// People-also-ask entries.
    #[serde(default)]
    pub people_also_ask: Vec<Value>,
    /// Local-pack block, when one was shown.
    #[serde(default)]
    pub local_results: Option<Value>,
    /// Knowledge-panel block, when one was shown.
    #[serde(default)]
    pub knowledge_graph: Option<Value>,
}

impl SerpData {
    /// Whether the page carried a featured snippet.
    pub fn has_featured_snippet(&self) -> bool {
        self.featured_snippet.is_some()
    }

    /// Whether the page carried a local pack.
    pub fn has_local_pack(&self) -> bool {
        self.local_results.is_some()
    }

    /// Whether the page carried a knowledge panel.
    pub fn has_knowledge_panel(&self) -> bool {
        self.knowledge_graph.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::from_str;

    /// Tests that creating a client with an empty API key returns an error.
    #[test]
    fn test_new_with_empty_api_key() {
        let result = SerpApiClient::new(String::new());
        assert!(result.is_err(), "Empty API key should return an error");

        if let Err(err) = result {
            assert!(
                matches!(err, Error::MissingApiKey(_)),
                "Should be a MissingApiKey error"
            );
        }
    }

    /// Tests that creating a client with a valid API key succeeds.
    #[test]
    fn test_new_with_valid_api_key() {
        let result = SerpApiClient::new("valid_key".to_owned());
        assert!(result.is_ok(), "Valid API key should succeed");

        if let Ok(client) = result {
            assert_eq!(client.api_key, "valid_key");
            assert_eq!(client.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        }
    }

    /// Tests that `with_timeout` overrides the default.
    #[test]
    fn test_with_timeout() {
        let result = SerpApiClient::new("test_key".to_owned());
        assert!(result.is_ok());
        if let Ok(client) = result {
            let client = client.with_timeout(Duration::from_secs(3));
            assert_eq!(client.timeout, Duration::from_secs(3));
        }
    }

    /// Tests that unknown payload fields are ignored and missing ones default.
    #[test]
    fn test_serp_data_permissive_parse() {
        let payload = r#"{
            "search_metadata": {"status": "Success"},
            "organic_results": [{"title": "a"}, {"title": "b"}],
            "featured_snippet": {"title": "answer"}
        }"#;

        let result = from_str::<SerpData>(payload);
        assert!(result.is_ok(), "Partial SERP JSON should parse");
        if let Ok(data) = result {
            assert_eq!(data.organic_results.len(), 2);
            assert!(data.has_featured_snippet());
            assert!(data.shopping_results.is_empty());
            assert!(!data.has_local_pack());
            assert!(!data.has_knowledge_panel());
        }
    }

    /// Tests that the default payload is fully neutral.
    #[test]
    fn test_serp_data_default_is_empty() {
        let data = SerpData::default();
        assert!(!data.has_featured_snippet());
        assert!(data.organic_results.is_empty());
        assert!(data.shopping_results.is_empty());
        assert!(data.comparison_results.is_empty());
        assert!(data.people_also_ask.is_empty());
    }
}
