use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::use_cases::ApproveReviewError;
use crate::domain::repositories::RepositoryError;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    pub fn invalid_path_parameter(name: &str) -> Self {
        ApiError::BadRequest(format!("invalid path parameter: {}", name))
    }

    pub fn invalid_query_parameter(name: &str) -> Self {
        ApiError::BadRequest(format!("invalid query parameter: {}", name))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) | ApiError::Internal(msg) => {
                write!(f, "{}", msg)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Internal(msg) => {
                tracing::error!("Request failed: {}", msg);
                msg
            }
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => msg,
        };

        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound(msg) => ApiError::NotFound(msg),
            RepositoryError::ValidationError(msg) => ApiError::BadRequest(msg),
            RepositoryError::DatabaseError(_) => ApiError::Internal(error.to_string()),
        }
    }
}

impl From<ApproveReviewError> for ApiError {
    fn from(error: ApproveReviewError) -> Self {
        match error {
            ApproveReviewError::ReviewNotFound(_) => ApiError::NotFound(error.to_string()),
            ApproveReviewError::AlreadyResolved { .. } | ApproveReviewError::InvalidPayload(_) => {
                ApiError::BadRequest(error.to_string())
            }
            ApproveReviewError::RepositoryError(inner) => inner.into(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// `axum::Json` whose rejections render as [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Query` whose rejections render as [`ApiError`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ApiError::invalid_path_parameter("id"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_errors_map_to_status_codes() {
        let not_found: ApiError = RepositoryError::not_found("company", 4).into();
        assert_eq!(not_found, ApiError::NotFound("company 4 not found".to_string()));

        let invalid: ApiError = RepositoryError::ValidationError("bad".to_string()).into();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let broken: ApiError = RepositoryError::DatabaseError("down".to_string()).into();
        assert_eq!(broken.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Ok(42));
        assert_eq!(
            parse_id("abc"),
            Err(ApiError::BadRequest("invalid path parameter: id".to_string()))
        );
    }
}
