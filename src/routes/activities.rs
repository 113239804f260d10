use actix_web::{web, HttpResponse};
use log::{error, info, warn};

use crate::models::activity::assign_ids;
use crate::models::search::SearchRequest;
use crate::models::search_response::{ActivitiesResponse, ResponseSource};
use crate::services::city_validation::validate_city;
use crate::services::error_classification::classify_error;
use crate::services::model_client::ModelClient;
use crate::services::sample_data::sample_activities;
use crate::services::search_service::Search;
use crate::state::AppState;

/*
    POST /api/activities
*/
pub async fn find<M, S>(
    state: web::Data<AppState<M, S>>,
    input: web::Json<SearchRequest>,
) -> HttpResponse
where
    M: ModelClient + 'static,
    S: Search + 'static,
{
    let criteria = input.into_inner().into_criteria();
    info!("Search request: {:?}", criteria);

    if let Err(err) = validate_city(&criteria.city) {
        warn!("Rejected city {:?}: {}", criteria.city, err);
        return HttpResponse::BadRequest().json(ActivitiesResponse::validation_error(
            "Invalid city",
            err.to_string(),
            Some(criteria),
        ));
    }

    let recommender = match state.active_recommender() {
        Some(recommender) => recommender,
        None => {
            info!("Serving sample activities");
            return HttpResponse::Ok().json(ActivitiesResponse::success(
                sample_activities(),
                criteria,
                ResponseSource::DummyData,
            ));
        }
    };

    match recommender.get_recommendations(&criteria).await {
        Ok(mut activities) => {
            assign_ids(&mut activities);
            HttpResponse::Ok().json(ActivitiesResponse::success(
                activities,
                criteria,
                ResponseSource::ClaudeApi,
            ))
        }
        Err(err) => {
            let details = err.to_string();
            let category = classify_error(&details);
            error!("Recommendation request failed ({:?}): {}", category, details);
            HttpResponse::InternalServerError().json(ActivitiesResponse::failure(
                category.user_message(),
                details,
                criteria,
            ))
        }
    }
}
