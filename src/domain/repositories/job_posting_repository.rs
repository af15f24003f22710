use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::entities::{JobPosting, JobPostingChanges, NewJobPosting};

#[async_trait]
pub trait JobPostingRepository: Send + Sync {
    async fn find_all(&self, company_id: Option<i64>) -> Result<Vec<JobPosting>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<JobPosting>, RepositoryError>;
    /// Fails with `ValidationError` when the company does not exist.
    async fn create(&self, job: NewJobPosting) -> Result<JobPosting, RepositoryError>;
    async fn update(&self, id: i64, changes: JobPostingChanges) -> Result<Option<JobPosting>, RepositoryError>;
    /// Removes the posting and clears the reference on dependent applications.
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}
