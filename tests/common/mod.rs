#![allow(dead_code)]

use actix_web::{web, App};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use family_activity_api::models::conversation::{
    ContentBlock, Message, MessageResponse, ToolDefinition, WEB_SEARCH_TOOL,
};
use family_activity_api::routes;
use family_activity_api::services::model_client::{ModelClient, ModelClientError};
use family_activity_api::services::search_service::Search;
use family_activity_api::state::AppState;

pub const FIVE_ACTIVITIES: &str = "Here are 5 great options for your family:

🎨 **Sunday Funnies Exhibit - Sunday 10am-5pm**
The Cartoon Art Museum showcases classic comic strips from the dawn of comics to today.
📍 Cartoon Art Museum • 2 miles

🔬 **Exploratorium - Saturday 10am-5pm**
Hands-on science exhibits that keep curious kids busy for hours on end.
📍 Pier 15 • 2.5 miles

🌳 **Crissy Field Picnic - All day**
Wide open lawns with Golden Gate Bridge views, perfect for kites and picnics.
📍 Crissy Field • 2.8 miles

⛵ **Maritime Museum - Saturday 9:30am-5pm**
Climb aboard historic ships and learn how sailors lived on the bay long ago.
📍 Aquatic Park • 2.2 miles

🦋 **Butterfly Garden Workshop - Sunday 2pm-4pm**
Plant native flowers and take home seed packets for a garden of your own.
📍 Children's Garden Center • 2.8 miles
";

pub type RequestLog = Arc<Mutex<Vec<Vec<Message>>>>;

/// Plays back a fixed list of responses and records every message history it was sent.
pub struct ScriptedModel {
    responses: Mutex<VecDeque<Result<MessageResponse, ModelClientError>>>,
    requests: RequestLog,
}

impl ScriptedModel {
    pub fn new(responses: Vec<Result<MessageResponse, ModelClientError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn request_log(&self) -> RequestLog {
        self.requests.clone()
    }
}

impl ModelClient for ScriptedModel {
    async fn create_message(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<MessageResponse, ModelClientError> {
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, WEB_SEARCH_TOOL);
        self.requests.lock().unwrap().push(messages.to_vec());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(ModelClientError::ApiError {
                    status: 500,
                    message: "script exhausted".to_string(),
                })
            })
    }
}

/// Asks for a search on every single call.
pub struct AlwaysSearchingModel {
    calls: Arc<AtomicUsize>,
}

impl AlwaysSearchingModel {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

impl ModelClient for AlwaysSearchingModel {
    async fn create_message(
        &self,
        _messages: &[Message],
        _tools: &[ToolDefinition],
    ) -> Result<MessageResponse, ModelClientError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(tool_response(&format!("toolu_{}", n), "family museum San Francisco"))
    }
}

/// Search provider that remembers the queries it was given.
#[derive(Clone, Default)]
pub struct RecordingSearch {
    pub queries: Arc<Mutex<Vec<String>>>,
}

impl Search for RecordingSearch {
    async fn search(&self, query: &str) -> String {
        self.queries.lock().unwrap().push(query.to_string());
        format!("results for {}", query)
    }
}

pub fn tool_response(id: &str, query: &str) -> MessageResponse {
    MessageResponse::from_blocks(vec![
        ContentBlock::text("Let me look that up."),
        ContentBlock::tool_use(id, WEB_SEARCH_TOOL, query),
    ])
}

pub fn text_response(text: &str) -> MessageResponse {
    MessageResponse::from_blocks(vec![ContentBlock::text(text)])
}

pub fn create_app<M, S>(
    state: AppState<M, S>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    M: ModelClient + 'static,
    S: Search + 'static,
{
    App::new()
        .app_data(web::Data::new(state))
        .configure(routes::configure::<M, S>)
}
