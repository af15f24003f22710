use axum::{Router, routing::get, routing::post};
use std::sync::Arc;

use crate::presentation::http::handlers::ReviewQueueHandler;

pub fn review_queue_routes(review_handler: Arc<ReviewQueueHandler>) -> Router {
    Router::new()
        .route(
            "/review-queue",
            get(ReviewQueueHandler::list_reviews).post(ReviewQueueHandler::create_review),
        )
        .route(
            "/review-queue/{id}/approve",
            post(ReviewQueueHandler::approve_review),
        )
        .route(
            "/review-queue/{id}/reject",
            post(ReviewQueueHandler::reject_review),
        )
        .with_state(review_handler)
}
