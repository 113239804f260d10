use crate::services::model_client::{
    AnthropicSettings, DEFAULT_API_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
};
use crate::services::recommendation_service::DEFAULT_MAX_ITERATIONS;
use std::env;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub request_timeout_secs: Option<u64>,
    pub use_dummy_data: bool,
    pub max_iterations: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unparsable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            host: non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(non_empty("PORT"), DEFAULT_PORT),
            api_key: non_empty("CLAUDE_API_KEY"),
            api_url: non_empty("CLAUDE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            model: non_empty("CLAUDE_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens: parse_or(non_empty("CLAUDE_MAX_TOKENS"), DEFAULT_MAX_TOKENS),
            request_timeout_secs: non_empty("CLAUDE_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|secs| *secs > 0),
            use_dummy_data: non_empty("USE_DUMMY_DATA")
                .map(|v| is_truthy(&v))
                .unwrap_or(false),
            max_iterations: parse_or(non_empty("MAX_TOOL_ITERATIONS"), DEFAULT_MAX_ITERATIONS)
                .max(1),
        }
    }

    /// Model client settings, if an API key is configured.
    pub fn anthropic_settings(&self) -> Option<AnthropicSettings> {
        self.api_key.as_ref().map(|key| AnthropicSettings {
            api_key: key.clone(),
            api_url: self.api_url.clone(),
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            timeout: self.request_timeout_secs.map(Duration::from_secs),
        })
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}
