use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::entities::{JobPosting, NewJobPosting, NewReviewItem, ReviewQueueItem};
use crate::domain::value_objects::ReviewStatus;

#[async_trait]
pub trait ReviewQueueRepository: Send + Sync {
    /// Newest first.
    async fn find_all(&self, status: Option<ReviewStatus>) -> Result<Vec<ReviewQueueItem>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ReviewQueueItem>, RepositoryError>;
    async fn create(&self, item: NewReviewItem) -> Result<ReviewQueueItem, RepositoryError>;
    /// Inserts `job` and marks the item approved as one atomic step.
    ///
    /// `NotFound` for an unknown id, `ValidationError` when the item is no
    /// longer pending or the job's company does not exist. Nothing is written
    /// on failure.
    async fn approve(&self, id: i64, job: NewJobPosting) -> Result<JobPosting, RepositoryError>;
    /// Same preconditions as `approve`.
    async fn reject(&self, id: i64) -> Result<ReviewQueueItem, RepositoryError>;
    /// Queues `item` unless a pending review or an open job posting already
    /// covers `company_id` + `title` at `url`. The check and the insert happen
    /// as one atomic step; `None` means the item was a duplicate.
    async fn create_unless_duplicate(
        &self,
        company_id: i64,
        title: &str,
        url: &str,
        item: NewReviewItem,
    ) -> Result<Option<ReviewQueueItem>, RepositoryError>;
    async fn count_by_status(&self, status: ReviewStatus) -> Result<usize, RepositoryError>;
}
