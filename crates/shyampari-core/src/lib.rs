//! shyampari-core: chat relay core (config, knowledge base, prompt builder,
//! fallback responder, request handler).
//!
//! The HTTP client for the remote model lives in `shyampari-skills`; the axum
//! server lives in the `shyampari-gateway` add-on.

mod chat;
mod completion;
pub mod fallback;
mod knowledge;
pub mod prompt;
mod shared;

pub use chat::{ChatError, ChatService, Route};
pub use completion::{CompletionError, CompletionProvider};
pub use fallback::{classify, fallback_response, Topic};
pub use knowledge::{CompanyInfo, ContactInfo, KnowledgeBase, KnowledgeError, KnowledgeSource, KnowledgeStore};
pub use prompt::{build_prompt, system_instruction};
pub use shared::{
    grok_api_key_from_env, ChatRequest, ChatResult, GatewayConfig, GrokSettings, DEFAULT_GROK_API_URL,
    DEFAULT_GROK_MODEL, ENV_GROK_API_KEY, VERSION,
};
