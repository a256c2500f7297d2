//! Groq API access: wire types, error mapping, and the `ModelApi` seam.
//!
//! Everything above this module talks to the provider through [`ModelApi`],
//! so the lister and tester can run against a fake in tests.

mod client;
mod error;
mod types;

#[cfg(test)]
pub mod fake;

pub use client::GroqClient;
pub use error::ApiError;
pub use types::{
    CatalogModel, ChatCompletion, ChatMessage, ChatRequest, ChatReply, ModelCatalog,
};

/// The two provider endpoints this tool uses.
pub trait ModelApi {
    /// Fetch the provider's model catalog (`GET /models`).
    async fn list_models(&self) -> Result<Vec<CatalogModel>, ApiError>;

    /// Send one chat-completion request and return the first choice.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError>;
}
