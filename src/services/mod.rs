pub mod activity_parser;
pub mod city_validation;
pub mod error_classification;
pub mod model_client;
pub mod prompt_service;
pub mod recommendation_service;
pub mod sample_data;
pub mod search_service;
