use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::entities::{ApplicationChanges, JobApplication, NewApplication};
use crate::domain::value_objects::Stage;

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    async fn find_all(&self, stage: Option<Stage>) -> Result<Vec<JobApplication>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<JobApplication>, RepositoryError>;
    /// Fails with `ValidationError` when `job_posting_id` points nowhere.
    async fn create(&self, application: NewApplication) -> Result<JobApplication, RepositoryError>;
    async fn update(&self, id: i64, changes: ApplicationChanges) -> Result<Option<JobApplication>, RepositoryError>;
    /// Removes the application together with its interview rounds.
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}
