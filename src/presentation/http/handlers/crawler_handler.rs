use axum::{Json, extract::State, response::IntoResponse};
use std::sync::Arc;

use crate::application::use_cases::RunCrawlerUseCase;
use crate::presentation::http::dto::CrawlRunResultDto;
use crate::presentation::http::errors::ApiError;

pub struct CrawlerHandler {
    run_crawler_use_case: Arc<RunCrawlerUseCase>,
}

impl CrawlerHandler {
    pub fn new(run_crawler_use_case: Arc<RunCrawlerUseCase>) -> Self {
        Self {
            run_crawler_use_case,
        }
    }

    pub async fn run_crawler(
        State(handler): State<Arc<CrawlerHandler>>,
    ) -> Result<impl IntoResponse, ApiError> {
        let result = handler.run_crawler_use_case.execute().await?;
        Ok(Json(CrawlRunResultDto::from(result)))
    }
}
