use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::application::use_cases::AdvanceApplicationStageUseCase;
use crate::domain::entities::{ApplicationChanges, NewApplication};
use crate::domain::repositories::{ApplicationRepository, RepositoryError};
use crate::domain::value_objects::Stage;
use crate::presentation::http::dto::{
    ApplicationDto, ApplicationQueryDto, CreateApplicationRequestDto, UpdateApplicationRequestDto,
};
use crate::presentation::http::errors::{ApiError, ApiJson, ApiQuery, parse_id};

pub struct ApplicationHandler {
    application_repository: Arc<dyn ApplicationRepository>,
    advance_stage_use_case: Arc<AdvanceApplicationStageUseCase>,
}

impl ApplicationHandler {
    pub fn new(
        application_repository: Arc<dyn ApplicationRepository>,
        advance_stage_use_case: Arc<AdvanceApplicationStageUseCase>,
    ) -> Self {
        Self {
            application_repository,
            advance_stage_use_case,
        }
    }

    pub async fn list_applications(
        State(handler): State<Arc<ApplicationHandler>>,
        ApiQuery(query): ApiQuery<ApplicationQueryDto>,
    ) -> Result<impl IntoResponse, ApiError> {
        let stage = match query.stage.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(Stage::from_string(raw).map_err(ApiError::BadRequest)?),
        };

        let applications = handler.application_repository.find_all(stage).await?;
        let dtos: Vec<ApplicationDto> = applications.into_iter().map(ApplicationDto::from).collect();
        Ok(Json(dtos))
    }

    pub async fn create_application(
        State(handler): State<Arc<ApplicationHandler>>,
        ApiJson(request): ApiJson<CreateApplicationRequestDto>,
    ) -> Result<impl IntoResponse, ApiError> {
        let new_app = NewApplication::try_from(request).map_err(ApiError::BadRequest)?;
        let app = handler.application_repository.create(new_app).await?;

        tracing::info!("Tracking application {} at {}", app.id, app.company_name);
        Ok((StatusCode::CREATED, Json(ApplicationDto::from(app))))
    }

    pub async fn update_application(
        State(handler): State<Arc<ApplicationHandler>>,
        Path(raw_id): Path<String>,
        ApiJson(request): ApiJson<UpdateApplicationRequestDto>,
    ) -> Result<impl IntoResponse, ApiError> {
        let id = parse_id(&raw_id)?;
        let changes = ApplicationChanges::try_from(request).map_err(ApiError::BadRequest)?;

        let app = handler
            .application_repository
            .update(id, changes)
            .await?
            .ok_or_else(|| RepositoryError::not_found("application", id))?;
        Ok(Json(ApplicationDto::from(app)))
    }

    pub async fn delete_application(
        State(handler): State<Arc<ApplicationHandler>>,
        Path(raw_id): Path<String>,
    ) -> Result<impl IntoResponse, ApiError> {
        let id = parse_id(&raw_id)?;
        if !handler.application_repository.delete(id).await? {
            return Err(RepositoryError::not_found("application", id).into());
        }
        Ok(StatusCode::NO_CONTENT)
    }

    pub async fn advance_application(
        State(handler): State<Arc<ApplicationHandler>>,
        Path(raw_id): Path<String>,
    ) -> Result<impl IntoResponse, ApiError> {
        let id = parse_id(&raw_id)?;
        let app = handler.advance_stage_use_case.execute(id).await?;
        Ok(Json(ApplicationDto::from(app)))
    }
}
