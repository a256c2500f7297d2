//! Request and response shapes for the OpenAI-compatible endpoints.

use serde::{Deserialize, Serialize};

use super::ApiError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: &str) -> Self {
        Self {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub total_tokens: u32,
}

/// The parts of a completion the tester reports.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatReply {
    pub content: String,
    pub total_tokens: u32,
    pub model: String,
}

impl TryFrom<ChatCompletion> for ChatReply {
    type Error = ApiError;

    fn try_from(completion: ChatCompletion) -> Result<Self, Self::Error> {
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or(ApiError::EmptyResponse("no choices"))?;
        let usage = completion
            .usage
            .ok_or(ApiError::EmptyResponse("no usage block"))?;
        Ok(ChatReply {
            content: choice.message.content.unwrap_or_default(),
            total_tokens: usage.total_tokens,
            model: completion.model,
        })
    }
}

/// Response of `GET /models`.
#[derive(Debug, Deserialize)]
pub struct ModelCatalog {
    #[serde(default)]
    pub data: Vec<CatalogModel>,
}

/// One catalog entry. Groq adds `context_window` on top of the OpenAI shape.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CatalogModel {
    pub id: String,
    #[serde(default)]
    pub context_window: Option<u64>,
    #[serde(default)]
    pub owned_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_request_serializes_openai_shape() {
        let request = ChatRequest {
            model: "llama-3.1-8b-instant".to_string(),
            messages: vec![ChatMessage::system("sys"), ChatMessage::user("hi")],
            temperature: 0.7,
            max_tokens: 150,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "llama-3.1-8b-instant");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "hi");
        assert_eq!(value["max_tokens"], 150);
        assert!((value["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn completion_into_reply() {
        let completion: ChatCompletion = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "model": "llama-3.1-8b-instant",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "Burning fossil fuels."}}],
            "usage": {"prompt_tokens": 30, "completion_tokens": 5, "total_tokens": 35}
        }))
        .unwrap();
        let reply = ChatReply::try_from(completion).unwrap();
        assert_eq!(reply.content, "Burning fossil fuels.");
        assert_eq!(reply.total_tokens, 35);
        assert_eq!(reply.model, "llama-3.1-8b-instant");
    }

    #[test]
    fn completion_without_choices_is_an_error() {
        let completion: ChatCompletion = serde_json::from_value(json!({
            "model": "m",
            "choices": [],
            "usage": {"total_tokens": 1}
        }))
        .unwrap();
        let err = ChatReply::try_from(completion).unwrap_err();
        assert!(matches!(err, ApiError::EmptyResponse(_)));
    }

    #[test]
    fn null_content_becomes_empty_text() {
        let completion: ChatCompletion = serde_json::from_value(json!({
            "model": "m",
            "choices": [{"message": {"content": null}}],
            "usage": {"total_tokens": 3}
        }))
        .unwrap();
        assert_eq!(ChatReply::try_from(completion).unwrap().content, "");
    }

    #[test]
    fn catalog_optional_fields() {
        let catalog: ModelCatalog = serde_json::from_value(json!({
            "object": "list",
            "data": [
                {"id": "a", "object": "model", "owned_by": "Meta", "context_window": 131072},
                {"id": "b"}
            ]
        }))
        .unwrap();
        assert_eq!(catalog.data.len(), 2);
        assert_eq!(catalog.data[0].context_window, Some(131072));
        assert_eq!(catalog.data[0].owned_by.as_deref(), Some("Meta"));
        assert_eq!(catalog.data[1].context_window, None);
        assert_eq!(catalog.data[1].owned_by, None);
    }
}
