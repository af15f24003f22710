use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::domain::entities::{InterviewRoundChanges, NewInterviewRound};
use crate::domain::repositories::{InterviewRoundRepository, RepositoryError};
use crate::presentation::http::dto::{
    CreateInterviewRoundRequestDto, InterviewRoundDto, UpdateInterviewRoundRequestDto,
};
use crate::presentation::http::errors::{ApiError, ApiJson, parse_id};

pub struct InterviewRoundHandler {
    round_repository: Arc<dyn InterviewRoundRepository>,
}

impl InterviewRoundHandler {
    pub fn new(round_repository: Arc<dyn InterviewRoundRepository>) -> Self {
        Self { round_repository }
    }

    pub async fn list_rounds(
        State(handler): State<Arc<InterviewRoundHandler>>,
        Path(raw_id): Path<String>,
    ) -> Result<impl IntoResponse, ApiError> {
        let application_id = parse_id(&raw_id)?;
        let rounds = handler
            .round_repository
            .find_by_application(application_id)
            .await?;
        let dtos: Vec<InterviewRoundDto> = rounds.into_iter().map(InterviewRoundDto::from).collect();
        Ok(Json(dtos))
    }

    pub async fn create_round(
        State(handler): State<Arc<InterviewRoundHandler>>,
        Path(raw_id): Path<String>,
        ApiJson(request): ApiJson<CreateInterviewRoundRequestDto>,
    ) -> Result<impl IntoResponse, ApiError> {
        let application_id = parse_id(&raw_id)?;
        let round = handler
            .round_repository
            .create(application_id, NewInterviewRound::from(request))
            .await?;
        Ok((StatusCode::CREATED, Json(InterviewRoundDto::from(round))))
    }

    pub async fn update_round(
        State(handler): State<Arc<InterviewRoundHandler>>,
        Path(raw_id): Path<String>,
        ApiJson(request): ApiJson<UpdateInterviewRoundRequestDto>,
    ) -> Result<impl IntoResponse, ApiError> {
        let id = parse_id(&raw_id)?;
        let round = handler
            .round_repository
            .update(id, InterviewRoundChanges::from(request))
            .await?
            .ok_or_else(|| RepositoryError::not_found("round", id))?;
        Ok(Json(InterviewRoundDto::from(round)))
    }

    pub async fn delete_round(
        State(handler): State<Arc<InterviewRoundHandler>>,
        Path(raw_id): Path<String>,
    ) -> Result<impl IntoResponse, ApiError> {
        let id = parse_id(&raw_id)?;
        if !handler.round_repository.delete(id).await? {
            return Err(RepositoryError::not_found("round", id).into());
        }
        Ok(StatusCode::NO_CONTENT)
    }
}
