use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::info;

use family_activity_api::config::AppConfig;
use family_activity_api::routes;
use family_activity_api::services::model_client::AnthropicClient;
use family_activity_api::services::search_service::StubWebSearch;
use family_activity_api::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    let state = web::Data::new(AppState::from_config(&config));
    info!("Serving {:?} recommendations", state.mode());

    let host = config.host.clone();
    let port = config.port;
    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .configure(routes::configure::<AnthropicClient, StubWebSearch>)
    })
    .bind((host, port))?
    .run()
    .await
}
