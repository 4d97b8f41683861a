//! Remote completion seam. The HTTP client lives in `shyampari-skills`.

use std::time::Duration;

/// Why a remote completion produced no text. Always recovered by the caller.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("provider returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("provider returned no completion choices")]
    EmptyChoices,
    #[error("malformed provider payload: {0}")]
    MalformedPayload(String),
}

/// Trait implemented by remote chat-completion backends.
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Model identifier sent with each request.
    fn model(&self) -> &str;

    /// One attempt, no retries. Returns the trimmed text of the first choice.
    async fn try_complete(&self, system: &str, prompt: &str) -> Result<String, CompletionError>;

    /// Best-effort variant of [`try_complete`](Self::try_complete): every failure becomes `None`.
    async fn complete(&self, system: &str, prompt: &str) -> Option<String> {
        match self.try_complete(system, prompt).await {
            Ok(text) if !text.is_empty() => {
                tracing::info!(target: "shyampari::grok", model = %self.model(), "Response generated using remote model");
                Some(text)
            }
            Ok(_) => {
                tracing::warn!(target: "shyampari::grok", "Empty completion from remote model");
                None
            }
            Err(CompletionError::Timeout(after)) => {
                tracing::error!(target: "shyampari::grok", timeout = ?after, "Remote completion timed out");
                None
            }
            Err(e) => {
                tracing::error!(target: "shyampari::grok", error = %e, "Remote completion failed");
                None
            }
        }
    }
}
