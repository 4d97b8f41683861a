//! Grok client: sends the prompt to the xAI chat-completion endpoint and returns the first choice.

use reqwest::StatusCode;
use serde::Deserialize;
use shyampari_core::{CompletionError, CompletionProvider, GrokSettings};
use std::time::Duration;

const ERROR_BODY_PREVIEW: usize = 512;

#[derive(Debug, Clone)]
pub struct GrokClientConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl GrokClientConfig {
    pub fn from_settings(settings: &GrokSettings, api_key: impl Into<String>) -> Self {
        Self {
            api_url: settings.api_url.clone(),
            api_key: api_key.into(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
            timeout: settings.timeout(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Remote completion client. One POST per call, bounded by the client timeout, never retried.
#[derive(Debug, Clone)]
pub struct GrokClient {
    client: reqwest::Client,
    config: GrokClientConfig,
}

impl GrokClient {
    pub fn new(config: GrokClientConfig) -> Result<Self, CompletionError> {
        if config.api_key.trim().is_empty() {
            return Err(CompletionError::MissingApiKey);
        }
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CompletionError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn request_body(&self, system: &str, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": prompt },
            ],
            "model": self.config.model,
            "stream": false,
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        })
    }

    fn transport_error(&self, e: reqwest::Error) -> CompletionError {
        if e.is_timeout() {
            CompletionError::Timeout(self.config.timeout)
        } else {
            CompletionError::Transport(e.to_string())
        }
    }
}

#[async_trait::async_trait]
impl CompletionProvider for GrokClient {
    fn model(&self) -> &str {
        &self.config.model
    }

    async fn try_complete(&self, system: &str, prompt: &str) -> Result<String, CompletionError> {
        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(self.config.api_key.trim())
            .json(&self.request_body(system, prompt))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let raw = response.text().await.map_err(|e| self.transport_error(e))?;
        tracing::debug!(
            target: "shyampari::grok",
            status = status.as_u16(),
            bytes = raw.len(),
            model = %self.config.model,
            "Grok API responded"
        );
        if status != StatusCode::OK {
            return Err(CompletionError::HttpStatus {
                status: status.as_u16(),
                body: raw.chars().take(ERROR_BODY_PREVIEW).collect(),
            });
        }

        let parsed: CompletionResponse =
            serde_json::from_str(&raw).map_err(|e| CompletionError::MalformedPayload(e.to_string()))?;
        let first = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyChoices)?;
        let content = first
            .message
            .content
            .ok_or_else(|| CompletionError::MalformedPayload("choice has no message content".to_string()))?;
        Ok(content.trim().to_string())
    }
}
