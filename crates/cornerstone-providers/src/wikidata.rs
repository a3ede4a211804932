use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use cornerstone_core::{Error, Result};

/// Wikidata API endpoint URL.
const WIKIDATA_API_URL: &str = "https://www.wikidata.org/w/api.php";
/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 5;
/// Default search language.
const DEFAULT_LANGUAGE: &str = "en";

/// Client for the Wikidata entity-search API.
///
/// The endpoint needs no credentials; the only tunables are the search
/// language and the request timeout.
pub struct WikidataClient {
    /// HTTP client for API requests.
    client: Client,
    /// Search language code.
    language: String,
    /// Per-request timeout.
    timeout: Duration,
}

impl Default for WikidataClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WikidataClient {
    /// Creates a new client with the default language and timeout.
    pub fn new() -> Self {
        Self {
            client: Client::default(),
            language: DEFAULT_LANGUAGE.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Sets the search language code.
    #[must_use]
    pub fn with_language<T: Into<String>>(mut self, language: T) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Runs an entity search, returning matching entities.
    ///
    /// Any failure is logged as a warning and collapses to an empty list.
    pub async fn search(&self, query: &str) -> Vec<WikidataEntity> {
        match self.search_inner(query).await {
            Ok(entities) => entities,
            Err(err) => {
                tracing::warn!("Wikidata search for {query:?} failed: {err}");
                Vec::new()
            }
        }
    }

    /// Typed search used beneath the degrading façade.
    async fn search_inner(&self, query: &str) -> Result<Vec<WikidataEntity>> {
        let params = [
            ("action", "wbsearchentities"),
            ("format", "json"),
            ("language", self.language.as_str()),
            ("search", query),
        ];

        let response = self
            .client
            .get(WIKIDATA_API_URL)
            .query(&params)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Error::Provider(format!(
                "Wikidata request failed with status {status}"
            )));
        }

        let body: SearchResponse = response.json().await.map_err(|err| {
            Error::InvalidResponse(format!("Failed to parse Wikidata response: {err}"))
        })?;

        Ok(body.search)
    }
}

/// Response envelope for `wbsearchentities`.
#[derive(Deserialize)]
struct SearchResponse {
    /// Matched entities; absent when the query produced nothing.
    #[serde(default)]
    search: Vec<WikidataEntity>,
}

/// One entity returned by a Wikidata search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikidataEntity {
    /// Wikidata identifier, e.g. `Q42`.
    #[serde(default)]
    pub id: String,
    /// Entity label in the search language.
    #[serde(default)]
    pub label: String,
    /// Short description, empty when Wikidata has none.
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::from_str;

    /// Tests builder defaults and overrides.
    #[test]
    fn test_builder_defaults() {
        let client = WikidataClient::new();
        assert_eq!(client.language, "en");
        assert_eq!(client.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let client = WikidataClient::new()
            .with_language("de")
            .with_timeout(Duration::from_secs(2));
        assert_eq!(client.language, "de");
        assert_eq!(client.timeout, Duration::from_secs(2));
    }

    /// Tests parsing a realistic search envelope.
    #[test]
    fn test_search_response_parse() {
        let payload = r#"{
            "searchinfo": {"search": "rust"},
            "search": [
                {"id": "Q575650", "label": "Rust", "description": "programming language"},
                {"id": "Q910252", "label": "rust"}
            ],
            "success": 1
        }"#;

        let result = from_str::<SearchResponse>(payload);
        assert!(result.is_ok(), "Search envelope should parse");
        if let Ok(body) = result {
            assert_eq!(body.search.len(), 2);
            assert_eq!(body.search[0].id, "Q575650");
            assert_eq!(body.search[0].description, "programming language");
            // Missing description defaults to empty.
            assert!(body.search[1].description.is_empty());
        }
    }

    /// Tests that an envelope without a search array parses as empty.
    #[test]
    fn test_search_response_missing_array() {
        let result = from_str::<SearchResponse>(r#"{"success": 1}"#);
        assert!(result.is_ok(), "Envelope without results should parse");
        if let Ok(body) = result {
            assert!(body.search.is_empty());
        }
    }
}
