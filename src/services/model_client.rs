use crate::models::conversation::{Message, MessageResponse, ToolDefinition};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 2000;
const API_VERSION: &str = "2023-06-01";

#[derive(Debug)]
pub enum ModelClientError {
    HttpError(reqwest::Error),
    ApiError { status: u16, message: String },
    DecodeError(String),
    ConfigurationError(String),
}

impl fmt::Display for ModelClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // The URL is left out so its digits cannot be read as status codes.
            ModelClientError::HttpError(err) if err.is_timeout() => {
                write!(f, "HTTP error: request timed out")
            }
            ModelClientError::HttpError(err) if err.is_connect() => {
                write!(f, "HTTP error: failed to connect to the model API")
            }
            ModelClientError::HttpError(err) => write!(f, "HTTP error: {}", err),
            ModelClientError::ApiError { status, message } => {
                write!(f, "API error ({}): {}", status, message)
            }
            ModelClientError::DecodeError(msg) => write!(f, "Response error: {}", msg),
            ModelClientError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl Error for ModelClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ModelClientError::HttpError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ModelClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ModelClientError::DecodeError(err.to_string())
        } else {
            ModelClientError::HttpError(err)
        }
    }
}

/// The conversational model the recommendation loop talks to.
///
/// One call is one round: the full history plus the tool declarations go out,
/// the model's ordered content blocks come back.
pub trait ModelClient {
    async fn create_message(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<MessageResponse, ModelClientError>;
}

#[derive(Debug, Clone)]
pub struct AnthropicSettings {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
    /// Whole-request timeout. `None` leaves it to the transport.
    pub timeout: Option<Duration>,
}

impl AnthropicSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: None,
        }
    }
}

#[derive(Serialize)]
struct CreateMessageRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: &'a [Message],
    tools: &'a [ToolDefinition],
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Messages API client over reqwest. Requests are never retried here.
#[derive(Clone)]
pub struct AnthropicClient {
    client: Client,
    settings: AnthropicSettings,
}

impl AnthropicClient {
    pub fn new(settings: AnthropicSettings) -> Result<Self, ModelClientError> {
        if settings.api_key.trim().is_empty() {
            return Err(ModelClientError::ConfigurationError(
                "CLAUDE_API_KEY not set".to_string(),
            ));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            settings,
        })
    }
}

impl ModelClient for AnthropicClient {
    async fn create_message(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<MessageResponse, ModelClientError> {
        let request = CreateMessageRequest {
            model: &self.settings.model,
            max_tokens: self.settings.max_tokens,
            messages,
            tools,
        };

        let response = self
            .client
            .post(&self.settings.api_url)
            .header("x-api-key", &self.settings.api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ModelClientError::ApiError {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ModelClientError::DecodeError(format!("Failed to parse response: {}", e)))
    }
}

/// Provider's `error.message` when the body is a structured error, else the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|parsed| parsed.error.message)
        .unwrap_or_else(|_| body.to_string())
}
