use diesel::prelude::*;

use crate::domain::entities::{JobPosting, JobPostingChanges, NewJobPosting};
use crate::infrastructure::database::schema::job_postings;

#[derive(Debug, Queryable, Identifiable, Selectable)]
#[diesel(table_name = job_postings)]
#[diesel(primary_key(id))]
pub struct JobPostingModel {
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

#[derive(Debug, Insertable)]
#[diesel(table_name = job_postings)]
pub struct NewJobPostingModel {
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

#[derive(Debug, AsChangeset)]
#[diesel(table_name = job_postings)]
pub struct UpdateJobPostingModel {
    pub title: Option<String>,
    pub location: Option<String>,
    pub source_url: Option<String>,
    pub apply_url: Option<String>,
    pub deadline_at: Option<String>,
    pub status: Option<String>,
    pub source_platform: Option<String>,
    pub last_seen_at: String,
}

impl NewJobPostingModel {
    pub fn new(job: NewJobPosting, now: String) -> Self {
        Self {
            company_id: job.company_id,
            title: job.title,
            location: job.location,
            source_url: job.source_url,
            apply_url: job.apply_url,
            deadline_at: job.deadline_at,
            status: job.status,
            source_platform: job.source_platform,
            first_seen_at: now.clone(),
            last_seen_at: now,
        }
    }
}

impl UpdateJobPostingModel {
    pub fn new(changes: JobPostingChanges, now: String) -> Self {
        Self {
            title: changes.title,
            location: changes.location,
            source_url: changes.source_url,
            apply_url: changes.apply_url,
            deadline_at: changes.deadline_at,
            status: changes.status,
            source_platform: changes.source_platform,
            last_seen_at: now,
        }
    }
}

impl From<JobPostingModel> for JobPosting {
    fn from(model: JobPostingModel) -> Self {
        JobPosting {
            id: model.id,
            company_id: model.company_id,
            title: model.title,
            location: model.location,
            source_url: model.source_url,
            apply_url: model.apply_url,
            deadline_at: model.deadline_at,
            status: model.status,
            source_platform: model.source_platform,
            first_seen_at: model.first_seen_at,
            last_seen_at: model.last_seen_at,
        }
    }
}
