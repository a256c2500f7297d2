//! In-memory `ModelApi` for tests.

use std::cell::RefCell;

use super::{ApiError, CatalogModel, ChatReply, ChatRequest, ModelApi};

/// Replies to every chat with a fixed text unless the model id is in `failing`.
/// Records every request so tests can check order and count.
pub struct FakeApi {
    pub reply: String,
    pub failing: Vec<(String, String)>,
    pub catalog: Result<Vec<CatalogModel>, String>,
    pub requests: RefCell<Vec<ChatRequest>>,
    pub catalog_calls: RefCell<usize>,
}

impl FakeApi {
    pub fn succeeding(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            failing: Vec::new(),
            catalog: Ok(Vec::new()),
            requests: RefCell::new(Vec::new()),
            catalog_calls: RefCell::new(0),
        }
    }

    pub fn failing_for(mut self, model_id: &str, message: &str) -> Self {
        self.failing.push((model_id.to_string(), message.to_string()));
        self
    }

    pub fn with_catalog(mut self, ids: &[&str]) -> Self {
        self.catalog = Ok(ids
            .iter()
            .map(|id| CatalogModel {
                id: id.to_string(),
                context_window: None,
                owned_by: None,
            })
            .collect());
        self
    }

    pub fn with_catalog_models(mut self, models: Vec<CatalogModel>) -> Self {
        self.catalog = Ok(models);
        self
    }

    pub fn with_catalog_error(mut self, message: &str) -> Self {
        self.catalog = Err(message.to_string());
        self
    }

    pub fn requested_models(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|r| r.model.clone()).collect()
    }
}

impl ModelApi for FakeApi {
    async fn list_models(&self) -> Result<Vec<CatalogModel>, ApiError> {
        *self.catalog_calls.borrow_mut() += 1;
        self.catalog.clone().map_err(ApiError::Other)
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        if let Some((_, message)) = self.failing.iter().find(|(id, _)| id == &request.model) {
            return Err(ApiError::Api(message.clone()));
        }
        Ok(ChatReply {
            content: self.reply.clone(),
            total_tokens: 42,
            model: request.model.clone(),
        })
    }
}
