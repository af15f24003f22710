use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::domain::entities::{CompanyChanges, NewCompany};
use crate::domain::repositories::{CompanyRepository, RepositoryError};
use crate::presentation::http::dto::{CompanyDto, CreateCompanyRequestDto, UpdateCompanyRequestDto};
use crate::presentation::http::errors::{ApiError, ApiJson, parse_id};

pub struct CompanyHandler {
    company_repository: Arc<dyn CompanyRepository>,
}

impl CompanyHandler {
    pub fn new(company_repository: Arc<dyn CompanyRepository>) -> Self {
        Self { company_repository }
    }

    pub async fn list_companies(
        State(handler): State<Arc<CompanyHandler>>,
    ) -> Result<impl IntoResponse, ApiError> {
        let companies = handler.company_repository.find_all().await?;
        let dtos: Vec<CompanyDto> = companies.into_iter().map(CompanyDto::from).collect();
        Ok(Json(dtos))
    }

    pub async fn create_company(
        State(handler): State<Arc<CompanyHandler>>,
        ApiJson(request): ApiJson<CreateCompanyRequestDto>,
    ) -> Result<impl IntoResponse, ApiError> {
        let new_company = NewCompany::try_from(request).map_err(ApiError::BadRequest)?;
        let company = handler.company_repository.create(new_company).await?;

        tracing::info!("Created company {} ({})", company.id, company.name);
        Ok((StatusCode::CREATED, Json(CompanyDto::from(company))))
    }

    pub async fn update_company(
        State(handler): State<Arc<CompanyHandler>>,
        Path(raw_id): Path<String>,
        ApiJson(request): ApiJson<UpdateCompanyRequestDto>,
    ) -> Result<impl IntoResponse, ApiError> {
        let id = parse_id(&raw_id)?;
        let changes = CompanyChanges::try_from(request).map_err(ApiError::BadRequest)?;

        let company = handler
            .company_repository
            .update(id, changes)
            .await?
            .ok_or_else(|| RepositoryError::not_found("company", id))?;
        Ok(Json(CompanyDto::from(company)))
    }

    pub async fn delete_company(
        State(handler): State<Arc<CompanyHandler>>,
        Path(raw_id): Path<String>,
    ) -> Result<impl IntoResponse, ApiError> {
        let id = parse_id(&raw_id)?;
        if !handler.company_repository.delete(id).await? {
            return Err(RepositoryError::not_found("company", id).into());
        }

        tracing::info!("Deleted company {}", id);
        Ok(StatusCode::NO_CONTENT)
    }
}
