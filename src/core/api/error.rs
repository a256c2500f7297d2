//! Provider error types.

use async_openai::error::OpenAIError;

/// Errors from a single provider call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("API error (401): {0}. Check GROQ_API_KEY in .env.local")]
    Auth(String),
    #[error("API error: {0}")]
    Api(String),
    #[error("Unusable response: {0}")]
    EmptyResponse(&'static str),
    #[error("{0}")]
    Other(String),
}

impl From<OpenAIError> for ApiError {
    fn from(e: OpenAIError) -> Self {
        match e {
            OpenAIError::ApiError(api) => {
                if api.message.contains("Invalid API Key") {
                    ApiError::Auth(api.message)
                } else {
                    ApiError::Api(api.message)
                }
            }
            other => map_api_error(other),
        }
    }
}

/// Markers of an HTTP 401 in error text. A bare "401" is not enough: it
/// shows up in column numbers, token counts and model ids.
const AUTH_MARKERS: [&str; 4] = [
    "401 Unauthorized",
    "status: 401",
    "(401)",
    "invalid_api_key",
];

fn is_auth_failure(s: &str) -> bool {
    AUTH_MARKERS.iter().any(|m| s.contains(m))
}

/// Map any displayable transport or decode error into an `ApiError`.
/// Recognizes auth failures and provider JSON error bodies by their text.
pub fn map_api_error<E: std::fmt::Display>(e: E) -> ApiError {
    let s = e.to_string();
    let message = if s.contains("\"error\"")
        && let Some((_, rest)) = s.split_once("\"message\":\"")
        && let Some((msg, _)) = rest.split_once('"')
    {
        Some(msg.to_string())
    } else {
        None
    };

    if is_auth_failure(&s) {
        return ApiError::Auth(message.unwrap_or(s));
    }
    match message {
        Some(msg) => ApiError::Api(msg),
        None => ApiError::Other(s),
    }
}
