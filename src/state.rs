use crate::config::AppConfig;
use crate::models::search_response::ResponseSource;
use crate::services::model_client::{AnthropicClient, ModelClient};
use crate::services::recommendation_service::RecommendationService;
use crate::services::search_service::{Search, StubWebSearch};
use log::{info, warn};

/// Shared, read-only state handed to every request handler.
pub struct AppState<M, S> {
    pub use_dummy_data: bool,
    pub recommender: Option<RecommendationService<M, S>>,
    /// Human-readable description of the configured model, for the health check.
    pub model_details: Option<String>,
}

impl<M: ModelClient, S: Search> AppState<M, S> {
    pub fn new(use_dummy_data: bool, recommender: Option<RecommendationService<M, S>>) -> Self {
        Self {
            use_dummy_data,
            recommender,
            model_details: None,
        }
    }

    pub fn with_model_details(mut self, details: impl Into<String>) -> Self {
        self.model_details = Some(details.into());
        self
    }

    /// The recommender to use for a request, or `None` when sample data should be served.
    pub fn active_recommender(&self) -> Option<&RecommendationService<M, S>> {
        if self.use_dummy_data {
            None
        } else {
            self.recommender.as_ref()
        }
    }

    pub fn mode(&self) -> ResponseSource {
        match self.active_recommender() {
            Some(_) => ResponseSource::ClaudeApi,
            None => ResponseSource::DummyData,
        }
    }
}

impl AppState<AnthropicClient, StubWebSearch> {
    pub fn from_config(config: &AppConfig) -> Self {
        let settings = match config.anthropic_settings() {
            Some(settings) => settings,
            None => {
                warn!("CLAUDE_API_KEY not set; serving sample activities");
                return Self::new(config.use_dummy_data, None);
            }
        };

        let details = format!(
            "Model {} configured ({})",
            settings.model,
            mask_key(&settings.api_key)
        );

        match AnthropicClient::new(settings) {
            Ok(client) => {
                info!(
                    "Model client initialized (max {} tool iterations)",
                    config.max_iterations
                );
                let recommender = RecommendationService::with_max_iterations(
                    client,
                    StubWebSearch,
                    config.max_iterations,
                );
                Self::new(config.use_dummy_data, Some(recommender)).with_model_details(details)
            }
            Err(e) => {
                warn!("Model client not available: {}. Serving sample activities.", e);
                Self::new(config.use_dummy_data, None)
            }
        }
    }
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}***{}", head, tail)
    } else {
        "***".to_string()
    }
}
