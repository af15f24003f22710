use axum::{Router, routing::get, routing::put};
use std::sync::Arc;

use crate::presentation::http::handlers::JobPostingHandler;

pub fn job_posting_routes(job_handler: Arc<JobPostingHandler>) -> Router {
    Router::new()
        .route(
            "/jobs",
            get(JobPostingHandler::list_jobs).post(JobPostingHandler::create_job),
        )
        .route(
            "/jobs/{id}",
            put(JobPostingHandler::update_job).delete(JobPostingHandler::delete_job),
        )
        .with_state(job_handler)
}
