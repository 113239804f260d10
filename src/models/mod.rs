pub mod activity;
pub mod conversation;
pub mod search;
pub mod search_response;
