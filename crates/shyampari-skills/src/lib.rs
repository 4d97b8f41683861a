//! Remote completion backends implementing [`CompletionProvider`].

pub use shyampari_core::{CompletionError, CompletionProvider};

mod grok_client;

pub use grok_client::{GrokClient, GrokClientConfig};
