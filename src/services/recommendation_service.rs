//! Bounded tool-use conversation that turns search criteria into activities.
//!
//! ```text
//! AwaitingModel --response--> Inspecting
//! Inspecting --tool_use, n < ceiling--> AwaitingModel
//! Inspecting --tool_use, n == ceiling--> Failed(MaxIterationsExceeded)
//! Inspecting --text only--> Parsing --> Done
//! ```
//!
//! Every piece of state lives in one [`Conversation`] per call and is dropped
//! when the call returns.

use crate::models::activity::Activity;
use crate::models::conversation::{
    query_argument, ContentBlock, Message, MessageResponse, ToolDefinition,
};
use crate::models::search::SearchCriteria;
use crate::services::activity_parser::parse_activities;
use crate::services::model_client::{ModelClient, ModelClientError};
use crate::services::prompt_service::build_prompt;
use crate::services::search_service::Search;
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt;

pub const DEFAULT_MAX_ITERATIONS: usize = 5;
pub const EXPECTED_ACTIVITIES: usize = 5;

#[derive(Debug)]
pub enum RecommendationError {
    /// The model call itself failed; passed through untouched.
    Transport(ModelClientError),
    /// The model was still asking for tools when the ceiling was reached.
    MaxIterationsExceeded(usize),
}

impl fmt::Display for RecommendationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendationError::Transport(err) => write!(f, "{}", err),
            RecommendationError::MaxIterationsExceeded(ceiling) => write!(
                f,
                "Max iterations ({}) reached without getting final response",
                ceiling
            ),
        }
    }
}

impl Error for RecommendationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RecommendationError::Transport(err) => Some(err),
            RecommendationError::MaxIterationsExceeded(_) => None,
        }
    }
}

impl From<ModelClientError> for RecommendationError {
    fn from(err: ModelClientError) -> Self {
        RecommendationError::Transport(err)
    }
}

#[derive(Debug)]
pub enum LoopState {
    AwaitingModel,
    Inspecting(MessageResponse),
    Parsing(String),
    Done(Vec<Activity>),
    Failed(RecommendationError),
}

/// Message history and round counter for a single recommendation request.
#[derive(Debug)]
pub struct Conversation {
    messages: Vec<Message>,
    iteration: usize,
    ceiling: usize,
}

impl Conversation {
    pub fn new(prompt: String, ceiling: usize) -> Self {
        Self {
            messages: vec![Message::user_text(prompt)],
            iteration: 0,
            ceiling: ceiling.max(1),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    /// Decide what follows a model response, running any requested searches.
    ///
    /// Tool calls run in the order they appear and their results go back in
    /// that order in a single user message.
    ///
    /// The assistant turn is echoed back as received, minus `Unknown` blocks:
    /// their payload is not kept, so they cannot be replayed.
    pub async fn inspect<S: Search>(&mut self, response: MessageResponse, search: &S) -> LoopState {
        if !response.requests_tools() {
            return LoopState::Parsing(response.text());
        }

        let mut results = Vec::new();
        for block in &response.content {
            if let ContentBlock::ToolUse { id, name, input } = block {
                let query = query_argument(input);
                info!("Tool use requested: {} with query: {}", name, query);
                let output = search.search(query).await;
                results.push(ContentBlock::tool_result(id.clone(), output));
            }
        }

        let echoed = response
            .content
            .into_iter()
            .filter(|block| *block != ContentBlock::Unknown)
            .collect();
        self.messages.push(Message::assistant(echoed));
        self.messages.push(Message::tool_results(results));
        self.iteration += 1;

        if self.iteration < self.ceiling {
            LoopState::AwaitingModel
        } else {
            LoopState::Failed(RecommendationError::MaxIterationsExceeded(self.ceiling))
        }
    }
}

/// Parse the final model text, keeping at most [`EXPECTED_ACTIVITIES`] records.
pub fn finish(text: &str) -> LoopState {
    debug!("=== FINAL TEXT FROM MODEL ===\n{}\n=== END FINAL TEXT ===", text);
    let mut activities = parse_activities(text);
    info!("Parsed {} activities", activities.len());

    if activities.len() < EXPECTED_ACTIVITIES {
        warn!(
            "Only found {} activities, expected {}",
            activities.len(),
            EXPECTED_ACTIVITIES
        );
    }
    activities.truncate(EXPECTED_ACTIVITIES);

    LoopState::Done(activities)
}

pub struct RecommendationService<M, S> {
    model: M,
    search: S,
    max_iterations: usize,
}

impl<M: ModelClient, S: Search> RecommendationService<M, S> {
    pub fn new(model: M, search: S) -> Self {
        Self::with_max_iterations(model, search, DEFAULT_MAX_ITERATIONS)
    }

    pub fn with_max_iterations(model: M, search: S, max_iterations: usize) -> Self {
        Self {
            model,
            search,
            max_iterations: max_iterations.max(1),
        }
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub async fn get_recommendations(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<Activity>, RecommendationError> {
        self.get_activity_recommendations(
            &criteria.city,
            &criteria.ages,
            &criteria.availability,
            &criteria.distance,
            &criteria.preferences,
        )
        .await
    }

    pub async fn get_activity_recommendations(
        &self,
        city: &str,
        ages: &str,
        availability: &str,
        distance: &str,
        preferences: &str,
    ) -> Result<Vec<Activity>, RecommendationError> {
        let prompt = build_prompt(city, ages, availability, distance, preferences);
        let tools = [ToolDefinition::web_search()];
        let mut conversation = Conversation::new(prompt, self.max_iterations);
        let mut state = LoopState::AwaitingModel;

        loop {
            state = match state {
                LoopState::AwaitingModel => {
                    info!("Model API iteration {}...", conversation.iteration() + 1);
                    match self.model.create_message(conversation.messages(), &tools).await {
                        Ok(response) => LoopState::Inspecting(response),
                        Err(err) => LoopState::Failed(err.into()),
                    }
                }
                LoopState::Inspecting(response) => {
                    conversation.inspect(response, &self.search).await
                }
                LoopState::Parsing(text) => finish(&text),
                LoopState::Done(activities) => return Ok(activities),
                LoopState::Failed(err) => {
                    error!("Error getting activity recommendations: {}", err);
                    return Err(err);
                }
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::search_service::StubWebSearch;
    use tokio_test::block_on;

    fn tool_round(id: &str, query: &str) -> MessageResponse {
        MessageResponse::from_blocks(vec![
            ContentBlock::text("Searching."),
            ContentBlock::tool_use(id, "web_search", query),
        ])
    }

    #[test]
    fn test_text_response_moves_to_parsing() {
        let mut conversation = Conversation::new("prompt".to_string(), 5);
        let response = MessageResponse::from_blocks(vec![
            ContentBlock::text("🎨 **Art**\n"),
            ContentBlock::text("📍 Gallery • 1 mile"),
        ]);

        match block_on(conversation.inspect(response, &StubWebSearch)) {
            LoopState::Parsing(text) => assert_eq!(text, "🎨 **Art**\n📍 Gallery • 1 mile"),
            other => panic!("unexpected state {:?}", other),
        }
        assert_eq!(conversation.messages().len(), 1);
        assert_eq!(conversation.iteration(), 0);
    }

    #[test]
    fn test_tool_round_appends_two_messages() {
        let mut conversation = Conversation::new("prompt".to_string(), 5);
        let state = block_on(conversation.inspect(tool_round("toolu_1", "outdoor fun"), &StubWebSearch));

        assert!(matches!(state, LoopState::AwaitingModel));
        assert_eq!(conversation.iteration(), 1);
        let messages = conversation.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].content.len(), 2);
        match &messages[2].content[0] {
            ContentBlock::ToolResult { tool_use_id, content } => {
                assert_eq!(tool_use_id, "toolu_1");
                assert!(content.contains("Crissy Field"));
            }
            other => panic!("unexpected block {:?}", other),
        }
    }

    #[test]
    fn test_tool_results_keep_request_order() {
        let mut conversation = Conversation::new("prompt".to_string(), 5);
        let response = MessageResponse::from_blocks(vec![
            ContentBlock::tool_use("a", "web_search", "family museum San Francisco"),
            ContentBlock::text("and also"),
            ContentBlock::tool_use("b", "web_search", "outdoor"),
        ]);
        block_on(conversation.inspect(response, &StubWebSearch));

        let ids: Vec<_> = conversation.messages()[2]
            .content
            .iter()
            .map(|block| match block {
                ContentBlock::ToolResult { tool_use_id, .. } => tool_use_id.as_str(),
                _ => "",
            })
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_ceiling_reached_fails() {
        let mut conversation = Conversation::new("prompt".to_string(), 2);
        let first = block_on(conversation.inspect(tool_round("1", "q"), &StubWebSearch));
        assert!(matches!(first, LoopState::AwaitingModel));

        let second = block_on(conversation.inspect(tool_round("2", "q"), &StubWebSearch));
        assert!(matches!(
            second,
            LoopState::Failed(RecommendationError::MaxIterationsExceeded(2))
        ));
        assert_eq!(conversation.messages().len(), 5);
    }

    #[test]
    fn test_unknown_blocks_are_not_echoed() {
        let mut conversation = Conversation::new("prompt".to_string(), 5);
        let response = MessageResponse::from_blocks(vec![
            ContentBlock::Unknown,
            ContentBlock::tool_use("x", "web_search", "q"),
        ]);
        block_on(conversation.inspect(response, &StubWebSearch));
        assert_eq!(conversation.messages()[1].content.len(), 1);
    }

    #[test]
    fn test_finish_truncates_to_five() {
        let text: String = (0..7).map(|i| format!("⭐ **Item {}**\n", i)).collect();
        match finish(&text) {
            LoopState::Done(activities) => {
                assert_eq!(activities.len(), 5);
                assert_eq!(activities[4].title, "<strong>Item 4</strong>");
            }
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_short_result_is_not_an_error() {
        assert!(matches!(finish("no activities here"), LoopState::Done(ref a) if a.is_empty()));
    }

    #[test]
    fn test_zero_ceiling_is_raised_to_one() {
        assert_eq!(Conversation::new(String::new(), 0).ceiling(), 1);
    }

    #[test]
    fn test_max_iterations_message() {
        assert_eq!(
            RecommendationError::MaxIterationsExceeded(5).to_string(),
            "Max iterations (5) reached without getting final response"
        );
    }
}
