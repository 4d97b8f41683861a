//! Request handler: remote completion first, canned fallback on any miss.

use crate::completion::{CompletionError, CompletionProvider};
use crate::fallback::fallback_response;
use crate::knowledge::KnowledgeStore;
use crate::prompt::{build_prompt, system_instruction};
use crate::shared::ChatResult;
use std::sync::Arc;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("Message cannot be empty")]
    EmptyMessage,
}

/// Initial state of the per-request decision, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    AttemptRemote,
    FallbackOnly,
}

/// Shared, immutable chat handler. `provider` is `Some` iff a credential was present at startup.
pub struct ChatService {
    knowledge: Arc<KnowledgeStore>,
    provider: Option<Arc<dyn CompletionProvider>>,
}

impl ChatService {
    pub fn new(knowledge: Arc<KnowledgeStore>, provider: Option<Arc<dyn CompletionProvider>>) -> Self {
        Self { knowledge, provider }
    }

    pub fn knowledge(&self) -> &KnowledgeStore {
        &self.knowledge
    }

    pub fn route(&self) -> Route {
        if self.provider.is_some() {
            Route::AttemptRemote
        } else {
            Route::FallbackOnly
        }
    }

    /// Model identifier when a provider is configured.
    pub fn model(&self) -> Option<&str> {
        self.provider.as_deref().map(|p| p.model())
    }

    /// Handles one message. At most one outbound call; remote failures never surface here.
    pub async fn respond(&self, message: &str) -> Result<ChatResult, ChatError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        if let Some(provider) = &self.provider {
            let kb = self.knowledge.base();
            let prompt = build_prompt(kb, message);
            if let Some(text) = provider.complete(&system_instruction(kb), &prompt).await {
                return Ok(ChatResult::from_model(text));
            }
        }

        tracing::info!(target: "shyampari::chat", "Using fallback response");
        Ok(ChatResult::from_fallback(fallback_response(message)))
    }

    /// Diagnostic call that reports the failure instead of falling back.
    pub async fn probe(&self, message: &str) -> Result<String, CompletionError> {
        let provider = self.provider.as_ref().ok_or(CompletionError::MissingApiKey)?;
        let kb = self.knowledge.base();
        provider
            .try_complete(&system_instruction(kb), &build_prompt(kb, message))
            .await
    }
}
