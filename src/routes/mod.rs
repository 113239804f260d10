use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};

use crate::models::search_response::ActivitiesResponse;
use crate::services::model_client::ModelClient;
use crate::services::search_service::Search;

pub mod activities;
pub mod health;

/// Mount the `/api` routes for a given model client and search provider.
pub fn configure<M, S>(cfg: &mut web::ServiceConfig)
where
    M: ModelClient + 'static,
    S: Search + 'static,
{
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/health", web::get().to(health::health_check::<M, S>))
            .route("/activities", web::post().to(activities::find::<M, S>)),
    );
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let body =
        ActivitiesResponse::validation_error("Invalid request body", err.to_string(), None);
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}
