use axum::{Router, routing::get, routing::post, routing::put};
use std::sync::Arc;

use crate::presentation::http::handlers::ApplicationHandler;

pub fn application_routes(application_handler: Arc<ApplicationHandler>) -> Router {
    Router::new()
        .route(
            "/applications",
            get(ApplicationHandler::list_applications).post(ApplicationHandler::create_application),
        )
        .route(
            "/applications/{id}",
            put(ApplicationHandler::update_application)
                .delete(ApplicationHandler::delete_application),
        )
        .route(
            "/applications/{id}/advance",
            post(ApplicationHandler::advance_application),
        )
        .with_state(application_handler)
}
