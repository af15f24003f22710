use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::domain::entities::{JobPostingChanges, NewJobPosting};
use crate::domain::repositories::{JobPostingRepository, RepositoryError};
use crate::presentation::http::dto::{
    CreateJobPostingRequestDto, JobPostingDto, JobPostingQueryDto, UpdateJobPostingRequestDto,
};
use crate::presentation::http::errors::{ApiError, ApiJson, ApiQuery, parse_id};

pub struct JobPostingHandler {
    job_repository: Arc<dyn JobPostingRepository>,
}

impl JobPostingHandler {
    pub fn new(job_repository: Arc<dyn JobPostingRepository>) -> Self {
        Self { job_repository }
    }

    pub async fn list_jobs(
        State(handler): State<Arc<JobPostingHandler>>,
        ApiQuery(query): ApiQuery<JobPostingQueryDto>,
    ) -> Result<impl IntoResponse, ApiError> {
        let company_id = match query.company_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<i64>()
                    .map_err(|_| ApiError::invalid_query_parameter("companyId"))?,
            ),
        };

        let jobs = handler.job_repository.find_all(company_id).await?;
        let dtos: Vec<JobPostingDto> = jobs.into_iter().map(JobPostingDto::from).collect();
        Ok(Json(dtos))
    }

    pub async fn create_job(
        State(handler): State<Arc<JobPostingHandler>>,
        ApiJson(request): ApiJson<CreateJobPostingRequestDto>,
    ) -> Result<impl IntoResponse, ApiError> {
        let new_job = NewJobPosting::try_from(request).map_err(ApiError::BadRequest)?;
        let job = handler.job_repository.create(new_job).await?;
        Ok((StatusCode::CREATED, Json(JobPostingDto::from(job))))
    }

    pub async fn update_job(
        State(handler): State<Arc<JobPostingHandler>>,
        Path(raw_id): Path<String>,
        ApiJson(request): ApiJson<UpdateJobPostingRequestDto>,
    ) -> Result<impl IntoResponse, ApiError> {
        let id = parse_id(&raw_id)?;
        let changes = JobPostingChanges::try_from(request).map_err(ApiError::BadRequest)?;

        let job = handler
            .job_repository
            .update(id, changes)
            .await?
            .ok_or_else(|| RepositoryError::not_found("job", id))?;
        Ok(Json(JobPostingDto::from(job)))
    }

    pub async fn delete_job(
        State(handler): State<Arc<JobPostingHandler>>,
        Path(raw_id): Path<String>,
    ) -> Result<impl IntoResponse, ApiError> {
        let id = parse_id(&raw_id)?;
        if !handler.job_repository.delete(id).await? {
            return Err(RepositoryError::not_found("job", id).into());
        }
        Ok(StatusCode::NO_CONTENT)
    }
}
