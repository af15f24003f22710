use axum::{Router, routing::get, routing::put};
use std::sync::Arc;

use crate::presentation::http::handlers::InterviewRoundHandler;

pub fn interview_round_routes(round_handler: Arc<InterviewRoundHandler>) -> Router {
    Router::new()
        .route(
            "/applications/{id}/rounds",
            get(InterviewRoundHandler::list_rounds).post(InterviewRoundHandler::create_round),
        )
        .route(
            "/rounds/{id}",
            put(InterviewRoundHandler::update_round).delete(InterviewRoundHandler::delete_round),
        )
        .with_state(round_handler)
}
