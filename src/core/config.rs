use std::env;
use std::path::Path;

use async_openai::config::OpenAIConfig;

pub const API_KEY_VAR: &str = "GROQ_API_KEY";
pub const BASE_URL_VAR: &str = "GROQ_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_config: OpenAIConfig,
    pub base_url: String,
    pub has_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GROQ_API_KEY not found in the environment or env file. Add GROQ_API_KEY=your_key to .env.local")]
    MissingApiKey,
}

/// Load the given env file if present. Only that file is read; variables
/// already set in the process environment win.
pub fn load_env_file(path: &Path) {
    match dotenv::from_path(path) {
        Ok(()) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) => log::debug!("No env file at {}: {}", path.display(), e),
    }
}

/// Load configuration from environment. Returns an error if the API key is missing.
pub fn load() -> Result<Config, ConfigError> {
    from_values(env::var(API_KEY_VAR).ok(), env::var(BASE_URL_VAR).ok())
}

/// Load configuration without requiring a key. A missing key yields a client
/// with an empty key whose requests fail at call time.
pub fn load_lenient() -> Config {
    from_values(env::var(API_KEY_VAR).ok(), env::var(BASE_URL_VAR).ok()).unwrap_or_else(|_| {
        log::warn!("{} is not set; requests will be sent without a key", API_KEY_VAR);
        build(String::new(), env::var(BASE_URL_VAR).ok())
    })
}

fn from_values(api_key: Option<String>, base_url: Option<String>) -> Result<Config, ConfigError> {
    let api_key = api_key
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .ok_or(ConfigError::MissingApiKey)?;
    Ok(build(api_key, base_url))
}

pub(crate) fn build(api_key: String, base_url: Option<String>) -> Config {
    let base_url = base_url
        .map(|u| u.trim().trim_end_matches('/').to_string())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let has_api_key = !api_key.is_empty();

    let openai_config = OpenAIConfig::new()
        .with_api_base(base_url.clone())
        .with_api_key(api_key);

    Config {
        openai_config,
        base_url,
        has_api_key,
    }
}
