//! Gemini client: trait + HTTP implementation.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::prompt::build_prompt;
use crate::types::GenerateContentRequest;

/// Seam for the remote generation call, so orchestration can be tested
/// against a mock.
///
/// The credential is received per call and never stored.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(&self, api_key: &str, context: &str, instruction: &str) -> Result<String>;
}

/// Configuration for the Gemini client.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Base URL (default: https://generativelanguage.googleapis.com/v1beta)
    pub base_url: String,
    /// Model name embedded in the endpoint path (default: gemini-pro)
    pub model: String,
    /// Request timeout. None means no timeout, which is the default.
    pub timeout: Option<Duration>,
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-pro".to_string(),
            timeout: None,
        }
    }

    /// Set base URL (trailing slash stripped). Used by tests to point at a
    /// local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        while url.ends_with('/') {
            url.pop();
        }
        self.base_url = url;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client for the Gemini `generateContent` endpoint.
///
/// One POST per call, no retry, no streaming.
pub struct GeminiClient {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(&self, api_key: &str, context: &str, instruction: &str) -> Result<String> {
        if api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }

        let prompt = build_prompt(context, instruction);
        let body = GenerateContentRequest::from_prompt(prompt);
        let url = self.endpoint();

        debug!(model = %self.config.model, "sending generateContent request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Pull a specific message out of the error body when there is one.
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .as_ref()
                .and_then(|v| v.get("error"))
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            return Err(Error::Remote(message));
        }

        let data: Value = response.json().await?;

        // Optional-chain down to the generated text; any missing step means
        // the shape is not one we understand.
        let text = data
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.get(0))
            .and_then(|p| p.get("text"))
            .and_then(|t| t.as_str());

        match text {
            // Returned as-is; trimming is the caller's call.
            Some(text) => Ok(text.to_string()),
            None => Err(Error::UnexpectedShape(data)),
        }
    }
}
