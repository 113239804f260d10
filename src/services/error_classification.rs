/// User-facing category for a failed recommendation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    RateLimit,
    ModelUnavailable,
    Timeout,
    Network,
    Generic,
}

impl ErrorCategory {
    pub fn user_message(&self) -> &'static str {
        match self {
            ErrorCategory::Authentication => {
                "Authentication with the AI service failed. Please check the API key configuration."
            }
            ErrorCategory::RateLimit => {
                "The AI service is receiving too many requests. Please try again in a moment."
            }
            ErrorCategory::ModelUnavailable => {
                "The AI model is currently unavailable. Please try again later."
            }
            ErrorCategory::Timeout => "The request to the AI service timed out. Please try again.",
            ErrorCategory::Network => {
                "Unable to reach the AI service. Please check your network connection."
            }
            ErrorCategory::Generic => "Failed to get activity recommendations. Please try again.",
        }
    }
}

const RULES: [(ErrorCategory, &[&str]); 5] = [
    (
        ErrorCategory::Authentication,
        &["401", "authentication", "api key", "x-api-key", "unauthorized"],
    ),
    (ErrorCategory::RateLimit, &["429", "rate limit", "rate_limit"]),
    (
        ErrorCategory::ModelUnavailable,
        &["model", "404", "not_found", "overloaded", "529"],
    ),
    (ErrorCategory::Timeout, &["timeout", "timed out"]),
    (
        ErrorCategory::Network,
        &[
            "network",
            "connect",
            "dns",
            "enotfound",
            "econnrefused",
            "error sending request",
        ],
    ),
];

/// Classify a failure by its description. First matching rule wins.
pub fn classify_error(description: &str) -> ErrorCategory {
    let lowered = description.to_lowercase();
    RULES
        .iter()
        .find(|(_, needles)| needles.iter().any(|needle| lowered.contains(needle)))
        .map(|(category, _)| *category)
        .unwrap_or(ErrorCategory::Generic)
}
