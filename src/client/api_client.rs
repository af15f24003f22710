use reqwest::{Client, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

use crate::presentation::http::dto::{
    ApplicationDto, CompanyDto, CrawlRunResultDto, CreateApplicationRequestDto,
    CreateCompanyRequestDto, CreateInterviewRoundRequestDto, CreateJobPostingRequestDto,
    CreateReviewItemRequestDto, InterviewRoundDto, JobPostingDto, OverviewDto,
    ReviewQueueItemDto, UpdateApplicationRequestDto, UpdateCompanyRequestDto,
    UpdateInterviewRoundRequestDto, UpdateJobPostingRequestDto,
};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/api/v1/";

#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    InvalidBaseUrl(String),
    Request(String),
    Api { status: u16, message: String },
    Decode(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::InvalidBaseUrl(url) => write!(f, "invalid base URL: {}", url),
            ClientError::Request(msg) => write!(f, "{}", msg),
            ClientError::Api { status, message } => write!(f, "HTTP {}: {}", status, message),
            ClientError::Decode(msg) => write!(f, "unreadable response: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ClientError::Decode(error.to_string())
        } else {
            ClientError::Request(error.to_string())
        }
    }
}

/// Trims, falls back to [`DEFAULT_BASE_URL`] when blank and guarantees a
/// trailing slash so relative endpoint paths resolve under it.
pub fn normalize_base_url(raw: &str) -> Result<Url, ClientError> {
    let trimmed = raw.trim();
    let candidate = if trimmed.is_empty() {
        DEFAULT_BASE_URL.to_string()
    } else if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };

    let url = Url::parse(&candidate).map_err(|_| ClientError::InvalidBaseUrl(raw.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(url)
}

/// Typed client for the `/api/v1` REST surface.
#[derive(Debug, Clone)]
pub struct FmroApiClient {
    http: Client,
    base_url: Url,
}

impl FmroApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            http: Client::new(),
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Points the client at another backend. Keeps the old URL on failure.
    pub fn set_base_url(&mut self, base_url: &str) -> Result<(), ClientError> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::Request(format!("bad endpoint {}: {}", path, e)))
    }

    async fn checked(request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| value.get("message")?.as_str().map(str::to_string))
            .unwrap_or_else(|| {
                if body.is_empty() {
                    status.canonical_reason().unwrap_or("request failed").to_string()
                } else {
                    body
                }
            });

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ClientError> {
        let request = self.http.get(self.endpoint(path)?).query(query);
        Ok(Self::checked(request).await?.json().await?)
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: Option<&B>) -> Result<T, ClientError> {
        let mut request = self.http.post(self.endpoint(path)?);
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(Self::checked(request).await?.json().await?)
    }

    async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ClientError> {
        let request = self.http.put(self.endpoint(path)?).json(body);
        Ok(Self::checked(request).await?.json().await?)
    }

    async fn delete(&self, path: &str) -> Result<(), ClientError> {
        Self::checked(self.http.delete(self.endpoint(path)?)).await?;
        Ok(())
    }

    pub async fn overview(&self) -> Result<OverviewDto, ClientError> {
        self.get("overview", &[]).await
    }

    pub async fn companies(&self) -> Result<Vec<CompanyDto>, ClientError> {
        self.get("companies", &[]).await
    }

    pub async fn create_company(&self, request: &CreateCompanyRequestDto) -> Result<CompanyDto, ClientError> {
        self.post("companies", Some(request)).await
    }

    pub async fn update_company(&self, id: i64, request: &UpdateCompanyRequestDto) -> Result<CompanyDto, ClientError> {
        self.put(&format!("companies/{}", id), request).await
    }

    pub async fn delete_company(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("companies/{}", id)).await
    }

    pub async fn jobs(&self, company_id: Option<i64>) -> Result<Vec<JobPostingDto>, ClientError> {
        let query: Vec<(&str, String)> = company_id
            .map(|id| vec![("companyId", id.to_string())])
            .unwrap_or_default();
        self.get("jobs", &query).await
    }

    pub async fn create_job(&self, request: &CreateJobPostingRequestDto) -> Result<JobPostingDto, ClientError> {
        self.post("jobs", Some(request)).await
    }

    pub async fn update_job(&self, id: i64, request: &UpdateJobPostingRequestDto) -> Result<JobPostingDto, ClientError> {
        self.put(&format!("jobs/{}", id), request).await
    }

    pub async fn delete_job(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("jobs/{}", id)).await
    }

    pub async fn applications(&self, stage: Option<&str>) -> Result<Vec<ApplicationDto>, ClientError> {
        let query: Vec<(&str, String)> = stage
            .map(|stage| vec![("stage", stage.to_string())])
            .unwrap_or_default();
        self.get("applications", &query).await
    }

    pub async fn create_application(
        &self,
        request: &CreateApplicationRequestDto,
    ) -> Result<ApplicationDto, ClientError> {
        self.post("applications", Some(request)).await
    }

    pub async fn update_application(
        &self,
        id: i64,
        request: &UpdateApplicationRequestDto,
    ) -> Result<ApplicationDto, ClientError> {
        self.put(&format!("applications/{}", id), request).await
    }

    pub async fn delete_application(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("applications/{}", id)).await
    }

    pub async fn advance_application(&self, id: i64) -> Result<ApplicationDto, ClientError> {
        self.post::<(), _>(&format!("applications/{}/advance", id), None).await
    }

    pub async fn rounds(&self, application_id: i64) -> Result<Vec<InterviewRoundDto>, ClientError> {
        self.get(&format!("applications/{}/rounds", application_id), &[]).await
    }

    pub async fn create_round(
        &self,
        application_id: i64,
        request: &CreateInterviewRoundRequestDto,
    ) -> Result<InterviewRoundDto, ClientError> {
        self.post(&format!("applications/{}/rounds", application_id), Some(request))
            .await
    }

    pub async fn update_round(
        &self,
        id: i64,
        request: &UpdateInterviewRoundRequestDto,
    ) -> Result<InterviewRoundDto, ClientError> {
        self.put(&format!("rounds/{}", id), request).await
    }

    pub async fn delete_round(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("rounds/{}", id)).await
    }

    pub async fn review_queue(&self, status: Option<&str>) -> Result<Vec<ReviewQueueItemDto>, ClientError> {
        let query: Vec<(&str, String)> = status
            .map(|status| vec![("status", status.to_string())])
            .unwrap_or_default();
        self.get("review-queue", &query).await
    }

    pub async fn create_review(
        &self,
        request: &CreateReviewItemRequestDto,
    ) -> Result<ReviewQueueItemDto, ClientError> {
        self.post("review-queue", Some(request)).await
    }

    pub async fn approve_review(&self, id: i64) -> Result<JobPostingDto, ClientError> {
        self.post::<(), _>(&format!("review-queue/{}/approve", id), None).await
    }

    pub async fn reject_review(&self, id: i64) -> Result<ReviewQueueItemDto, ClientError> {
        self.post::<(), _>(&format!("review-queue/{}/reject", id), None).await
    }

    pub async fn run_crawler(&self) -> Result<CrawlRunResultDto, ClientError> {
        self.post::<(), _>("crawler/run", None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let url = normalize_base_url("  http://10.0.2.2:8080/api/v1 ").unwrap();
        assert_eq!(url.as_str(), "http://10.0.2.2:8080/api/v1/");
        assert_eq!(
            url.join("companies/3").unwrap().as_str(),
            "http://10.0.2.2:8080/api/v1/companies/3"
        );
    }

    #[test]
    fn test_blank_base_url_uses_default() {
        assert_eq!(normalize_base_url("").unwrap().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(matches!(
            normalize_base_url("not a url"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
        assert!(normalize_base_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_failed_rebase_keeps_previous_url() {
        let mut client = FmroApiClient::new("http://localhost:8080/api/v1").unwrap();
        assert!(client.set_base_url("::").is_err());
        assert_eq!(client.base_url(), "http://localhost:8080/api/v1/");
    }
}
