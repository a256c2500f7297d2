//! Model tester: one fixed chat request per descriptor, classified as working or failed.
//!
//! The run is a strict sequential fold over the descriptor list. Every
//! descriptor is attempted exactly once; an error never stops the loop.

mod summary;


use crate::core::api::{ChatMessage, ChatRequest, ModelApi};
use crate::core::models::ModelDescriptor;

pub use summary::RunSummary;

pub const SYSTEM_PROMPT: &str = "You are a climate expert. Answer briefly in 1-2 sentences.";
pub const USER_PROMPT: &str = "What causes high CO2 levels?";
pub const TEMPERATURE: f64 = 0.7;
pub const MAX_TOKENS: u32 = 150;

/// Result of testing one model.
#[derive(Clone, Debug, PartialEq)]
pub enum TestOutcome {
    Success {
        response_text: String,
        token_count: u32,
        echoed_model_id: String,
    },
    Failure {
        error_message: String,
    },
}

impl TestOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TestOutcome::Success { .. })
    }
}

/// The fixed probe request for `model_id`.
pub fn probe_request(model_id: &str) -> ChatRequest {
    ChatRequest {
        model: model_id.to_string(),
        messages: vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(USER_PROMPT),
        ],
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    }
}

/// Send the probe request for one descriptor and classify the result.
pub async fn test_model<A: ModelApi>(api: &A, descriptor: &ModelDescriptor) -> TestOutcome {
    match api.chat(&probe_request(&descriptor.id)).await {
        Ok(reply) => TestOutcome::Success {
            response_text: reply.content,
            token_count: reply.total_tokens,
            echoed_model_id: reply.model,
        },
        Err(e) => {
            log::warn!("{} failed: {}", descriptor.id, e);
            TestOutcome::Failure {
                error_message: e.to_string(),
            }
        }
    }
}

/// Test every descriptor in order. `on_outcome` sees each result as soon as it is known.
pub async fn run_all<A, F>(api: &A, descriptors: &[ModelDescriptor], mut on_outcome: F) -> RunSummary
where
    A: ModelApi,
    F: FnMut(&ModelDescriptor, &TestOutcome),
{
    let mut summary = RunSummary::default();
    for descriptor in descriptors {
        let outcome = test_model(api, descriptor).await;
        on_outcome(descriptor, &outcome);
        summary.push(descriptor.clone(), outcome);
    }
    log::info!(
        "Tested {} model(s): {} working, {} failed",
        summary.total(),
        summary.working_count(),
        summary.failed_count()
    );
    summary
}
