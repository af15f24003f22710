use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::entities::{InterviewRound, InterviewRoundChanges, NewInterviewRound};

#[async_trait]
pub trait InterviewRoundRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<InterviewRound>, RepositoryError>;
    async fn find_by_application(&self, application_id: i64) -> Result<Vec<InterviewRound>, RepositoryError>;
    /// Fails with `ValidationError` when the application does not exist.
    async fn create(&self, application_id: i64, round: NewInterviewRound) -> Result<InterviewRound, RepositoryError>;
    async fn update(&self, id: i64, changes: InterviewRoundChanges) -> Result<Option<InterviewRound>, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}
