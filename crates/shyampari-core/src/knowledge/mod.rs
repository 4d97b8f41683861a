//! Static knowledge base: company facts loaded once from JSON at startup.
//!
//! The document is optional. A missing or malformed file falls back to the
//! built-in facts, so the service can always start.

mod store;

pub use store::{CompanyInfo, ContactInfo, KnowledgeBase, KnowledgeError, KnowledgeSource, KnowledgeStore};
