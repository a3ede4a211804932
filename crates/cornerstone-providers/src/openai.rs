use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use cornerstone_core::{ChatModel, Error, Result};

/// `OpenAI` chat-completions endpoint URL.
const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// Default model for keyword expansion.
const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Env var key for the `OpenAI` API key.
const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// `ChatModel` implementation backed by the `OpenAI` API.
pub struct OpenAiChat {
    /// HTTP client for API requests.
    client: Client,
    /// `OpenAI` API key.
    api_key: String,
    /// Model name to use.
    model: String,
}

impl OpenAiChat {
    /// Creates a new `OpenAiChat` with the given API key.
    ///
    /// # Errors
    /// Returns an error if the provided API key is empty.
    pub fn new(api_key: String) -> Result<Self> {
        if api_key.is_empty() {
            return Err(Error::MissingApiKey(ENV_OPENAI_API_KEY.to_owned()));
        }

        Ok(Self {
            client: Client::default(),
            api_key,
            model: DEFAULT_MODEL.to_owned(),
        })
    }

    /// Creates a new `OpenAiChat` from environment variables.
    ///
    /// # Errors
    /// Returns an error if the env var is missing.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(ENV_OPENAI_API_KEY)
            .map_err(|_| Error::MissingApiKey(ENV_OPENAI_API_KEY.to_owned()))?;
        Self::new(api_key)
    }

    /// Creates a new `OpenAiChat` from config or environment.
    ///
    /// # Errors
    /// Returns an error if the API key is not provided.
    pub fn from_config_or_env(config_key: Option<String>) -> Result<Self> {
        let api_key = config_key
            .or_else(|| env::var(ENV_OPENAI_API_KEY).ok())
            .ok_or_else(|| {
                Error::MissingApiKey(format!("{ENV_OPENAI_API_KEY} or config.toml openai_api_key"))
            })?;
        Self::new(api_key)
    }

    /// Sets the model to use for completions.
    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }
}

/// Response payload returned by the chat-completions endpoint.
#[derive(Deserialize)]
struct ChatResponse {
    /// List of generated choices.
    choices: Vec<Choice>,
}

/// Individual completion choice.
#[derive(Deserialize)]
struct Choice {
    /// Message payload representing the completion text.
    message: Message,
}

/// Message structure containing generated content.
#[derive(Deserialize)]
struct Message {
    /// Text content produced by the model.
    content: String,
}

#[async_trait]
impl ChatModel for OpenAiChat {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let request_body = json!({
            "model": self.model,
            "messages": [{
                "role": "user",
                "content": prompt,
            }],
        });

        let response = self
            .client
            .post(OPENAI_API_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::Provider(format!(
                "OpenAI API request failed with status {status}: {error_text}"
            )));
        }

        let api_response: ChatResponse = response
            .json()
            .await
            .map_err(|err| Error::InvalidResponse(format!("Failed to parse response: {err}")))?;

        api_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::InvalidResponse("No choices in OpenAI response".to_owned()))
    }
}
