use axum::{Json, extract::State, response::IntoResponse};
use std::sync::Arc;

use crate::application::use_cases::GetOverviewUseCase;
use crate::presentation::http::dto::OverviewDto;
use crate::presentation::http::errors::ApiError;

pub struct OverviewHandler {
    get_overview_use_case: Arc<GetOverviewUseCase>,
}

impl OverviewHandler {
    pub fn new(get_overview_use_case: Arc<GetOverviewUseCase>) -> Self {
        Self {
            get_overview_use_case,
        }
    }

    pub async fn get_overview(
        State(handler): State<Arc<OverviewHandler>>,
    ) -> Result<impl IntoResponse, ApiError> {
        let overview = handler.get_overview_use_case.execute().await?;
        Ok(Json(OverviewDto::from(overview)))
    }
}
