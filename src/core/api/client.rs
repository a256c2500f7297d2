//! `ModelApi` backed by async-openai pointed at Groq's OpenAI-compatible base URL.

use std::time::Duration;

use async_openai::Client;
use async_openai::config::OpenAIConfig;

use crate::core::config::Config;

use super::{ApiError, CatalogModel, ChatCompletion, ChatReply, ChatRequest, ModelApi, ModelCatalog};

/// Thin wrapper constructed once per run and passed to the lister and tester.
pub struct GroqClient {
    inner: Client<OpenAIConfig>,
}

/// Backoff that gives up after the first attempt. async-openai otherwise
/// retries 429 and 5xx responses for up to 15 minutes.
fn single_attempt() -> backoff::ExponentialBackoff {
    backoff::ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

impl GroqClient {
    pub fn new(config: &Config) -> Self {
        log::debug!("Using API base {}", config.base_url);
        if !config.has_api_key {
            log::debug!("Client built without an API key");
        }
        Self {
            inner: Client::with_config(config.openai_config.clone()).with_backoff(single_attempt()),
        }
    }
}

impl ModelApi for GroqClient {
    async fn list_models(&self) -> Result<Vec<CatalogModel>, ApiError> {
        let catalog: ModelCatalog = self.inner.models().list_byot().await?;
        log::debug!("Catalog returned {} model(s)", catalog.data.len());
        Ok(catalog.data)
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        log::debug!("Chat request to {}", request.model);
        let completion: ChatCompletion = self.inner.chat().create_byot(request).await?;
        ChatReply::try_from(completion)
    }
}
