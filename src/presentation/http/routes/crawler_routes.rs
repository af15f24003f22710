use axum::{Router, routing::get, routing::post};
use std::sync::Arc;

use crate::presentation::http::handlers::{CrawlerHandler, OverviewHandler};

pub fn crawler_routes(crawler_handler: Arc<CrawlerHandler>) -> Router {
    Router::new()
        .route("/crawler/run", post(CrawlerHandler::run_crawler))
        .with_state(crawler_handler)
}

pub fn overview_routes(overview_handler: Arc<OverviewHandler>) -> Router {
    Router::new()
        .route("/overview", get(OverviewHandler::get_overview))
        .with_state(overview_handler)
}
