use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::models::search_response::ResponseSource;
use crate::services::model_client::ModelClient;
use crate::services::search_service::Search;
use crate::state::AppState;

#[derive(Serialize)]
struct HealthStatus {
    message: String,
    mode: ResponseSource,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check<M, S>(state: web::Data<AppState<M, S>>) -> impl Responder
where
    M: ModelClient + 'static,
    S: Search + 'static,
{
    let mut services = HashMap::new();
    services.insert("model_api".to_string(), check_model_api(state.get_ref()));

    HttpResponse::Ok().json(HealthStatus {
        message: "Server is running!".to_string(),
        mode: state.mode(),
        services,
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn check_model_api<M: ModelClient, S: Search>(state: &AppState<M, S>) -> ServiceStatus {
    match (&state.recommender, state.use_dummy_data) {
        (Some(_), false) => ServiceStatus {
            status: "ok".to_string(),
            details: state.model_details.clone(),
        },
        (Some(_), true) => ServiceStatus {
            status: "disabled".to_string(),
            details: Some("USE_DUMMY_DATA is set; serving sample activities".to_string()),
        },
        (None, _) => ServiceStatus {
            status: "disabled".to_string(),
            details: Some("CLAUDE_API_KEY not configured".to_string()),
        },
    }
}
