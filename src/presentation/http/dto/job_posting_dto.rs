use serde::{Deserialize, Serialize};

use crate::domain::entities::{JobPosting, JobPostingChanges, NewJobPosting};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingDto {
    pub id: i64,
    pub company_id: i64,
    pub title: String,
    pub location: Option<String>,
    pub source_url: Option<String>,
    pub apply_url: Option<String>,
    pub deadline_at: Option<String>,
    pub status: String,
    pub source_platform: Option<String>,
    pub first_seen_at: String,
    pub last_seen_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobPostingRequestDto {
    pub company_id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_platform: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobPostingRequestDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_platform: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingQueryDto {
    pub company_id: Option<String>,
}

impl From<JobPosting> for JobPostingDto {
    fn from(job: JobPosting) -> Self {
        Self {
            id: job.id,
            company_id: job.company_id,
            title: job.title,
            location: job.location,
            source_url: job.source_url,
            apply_url: job.apply_url,
            deadline_at: job.deadline_at,
            status: job.status,
            source_platform: job.source_platform,
            first_seen_at: job.first_seen_at,
            last_seen_at: job.last_seen_at,
        }
    }
}

impl TryFrom<CreateJobPostingRequestDto> for NewJobPosting {
    type Error = String;

    fn try_from(request: CreateJobPostingRequestDto) -> Result<Self, Self::Error> {
        let mut job = NewJobPosting::new(request.company_id, &request.title)?;
        job.location = request.location;
        job.source_url = request.source_url;
        job.apply_url = request.apply_url;
        job.deadline_at = request.deadline_at;
        if let Some(status) = request.status {
            job.status = status;
        }
        job.source_platform = request.source_platform;
        Ok(job)
    }
}

impl TryFrom<UpdateJobPostingRequestDto> for JobPostingChanges {
    type Error = String;

    fn try_from(request: UpdateJobPostingRequestDto) -> Result<Self, Self::Error> {
        JobPostingChanges {
            title: request.title,
            location: request.location,
            source_url: request.source_url,
            apply_url: request.apply_url,
            deadline_at: request.deadline_at,
            status: request.status,
            source_platform: request.source_platform,
        }
        .normalized()
    }
}
