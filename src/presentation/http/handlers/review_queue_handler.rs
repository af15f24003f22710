use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::application::use_cases::{ApproveReviewUseCase, RejectReviewUseCase};
use crate::domain::entities::NewReviewItem;
use crate::domain::repositories::ReviewQueueRepository;
use crate::domain::value_objects::ReviewStatus;
use crate::presentation::http::dto::{
    CreateReviewItemRequestDto, JobPostingDto, ReviewQueueItemDto, ReviewQueueQueryDto,
};
use crate::presentation::http::errors::{ApiError, ApiJson, ApiQuery, parse_id};

pub struct ReviewQueueHandler {
    review_repository: Arc<dyn ReviewQueueRepository>,
    approve_review_use_case: Arc<ApproveReviewUseCase>,
    reject_review_use_case: Arc<RejectReviewUseCase>,
}

impl ReviewQueueHandler {
    pub fn new(
        review_repository: Arc<dyn ReviewQueueRepository>,
        approve_review_use_case: Arc<ApproveReviewUseCase>,
        reject_review_use_case: Arc<RejectReviewUseCase>,
    ) -> Self {
        Self {
            review_repository,
            approve_review_use_case,
            reject_review_use_case,
        }
    }

    pub async fn list_reviews(
        State(handler): State<Arc<ReviewQueueHandler>>,
        ApiQuery(query): ApiQuery<ReviewQueueQueryDto>,
    ) -> Result<impl IntoResponse, ApiError> {
        let status = match query.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(ReviewStatus::from_string(raw).map_err(ApiError::BadRequest)?),
        };

        let items = handler.review_repository.find_all(status).await?;
        let dtos: Vec<ReviewQueueItemDto> = items.into_iter().map(ReviewQueueItemDto::from).collect();
        Ok(Json(dtos))
    }

    pub async fn create_review(
        State(handler): State<Arc<ReviewQueueHandler>>,
        ApiJson(request): ApiJson<CreateReviewItemRequestDto>,
    ) -> Result<impl IntoResponse, ApiError> {
        let new_item = NewReviewItem::try_from(request).map_err(ApiError::BadRequest)?;
        let item = handler.review_repository.create(new_item).await?;
        Ok((StatusCode::CREATED, Json(ReviewQueueItemDto::from(item))))
    }

    pub async fn approve_review(
        State(handler): State<Arc<ReviewQueueHandler>>,
        Path(raw_id): Path<String>,
    ) -> Result<impl IntoResponse, ApiError> {
        let id = parse_id(&raw_id)?;
        let job = handler.approve_review_use_case.execute(id).await?;
        Ok((StatusCode::CREATED, Json(JobPostingDto::from(job))))
    }

    pub async fn reject_review(
        State(handler): State<Arc<ReviewQueueHandler>>,
        Path(raw_id): Path<String>,
    ) -> Result<impl IntoResponse, ApiError> {
        let id = parse_id(&raw_id)?;
        let item = handler.reject_review_use_case.execute(id).await?;
        Ok(Json(ReviewQueueItemDto::from(item)))
    }
}
