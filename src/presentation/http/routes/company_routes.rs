use axum::{Router, routing::get, routing::put};
use std::sync::Arc;

use crate::presentation::http::handlers::CompanyHandler;

pub fn company_routes(company_handler: Arc<CompanyHandler>) -> Router {
    Router::new()
        .route(
            "/companies",
            get(CompanyHandler::list_companies).post(CompanyHandler::create_company),
        )
        .route(
            "/companies/{id}",
            put(CompanyHandler::update_company).delete(CompanyHandler::delete_company),
        )
        .with_state(company_handler)
}
