use crate::models::activity::Activity;
use crate::models::search::SearchCriteria;
use serde::{Deserialize, Serialize};

/// Where the activities in a response came from.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseSource {
    ClaudeApi,
    DummyData,
    ValidationError,
    ErrorResponse,
}

/// Envelope returned by the activities endpoint, for successes and failures alike.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitiesResponse {
    pub activities: Vec<Activity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_criteria: Option<SearchCriteria>,
    pub source: ResponseSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ActivitiesResponse {
    pub fn success(
        activities: Vec<Activity>,
        criteria: SearchCriteria,
        source: ResponseSource,
    ) -> Self {
        Self {
            activities,
            search_criteria: Some(criteria),
            source,
            error: None,
            message: None,
            details: None,
        }
    }

    pub fn validation_error(
        error: impl Into<String>,
        message: impl Into<String>,
        criteria: Option<SearchCriteria>,
    ) -> Self {
        Self {
            activities: Vec::new(),
            search_criteria: criteria,
            source: ResponseSource::ValidationError,
            error: Some(error.into()),
            message: Some(message.into()),
            details: None,
        }
    }

    pub fn failure(error: impl Into<String>, details: String, criteria: SearchCriteria) -> Self {
        Self {
            activities: Vec::new(),
            search_criteria: Some(criteria),
            source: ResponseSource::ErrorResponse,
            error: Some(error.into()),
            message: None,
            details: Some(details),
        }
    }
}
