use std::sync::Arc;

use crate::domain::entities::JobPosting;
use crate::domain::repositories::{RepositoryError, ReviewQueueRepository};
use crate::domain::value_objects::ReviewStatus;

#[derive(Debug)]
pub enum ApproveReviewError {
    ReviewNotFound(i64),
    AlreadyResolved { id: i64, status: ReviewStatus },
    InvalidPayload(String),
    RepositoryError(RepositoryError),
}

impl std::fmt::Display for ApproveReviewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApproveReviewError::ReviewNotFound(id) => write!(f, "review {} not found", id),
            ApproveReviewError::AlreadyResolved { id, status } => {
                write!(f, "review {} is already {}", id, status)
            }
            ApproveReviewError::InvalidPayload(msg) => write!(f, "{}", msg),
            ApproveReviewError::RepositoryError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ApproveReviewError {}

impl From<RepositoryError> for ApproveReviewError {
    fn from(error: RepositoryError) -> Self {
        ApproveReviewError::RepositoryError(error)
    }
}

/// Turns a pending review item into a job posting.
pub struct ApproveReviewUseCase {
    review_repository: Arc<dyn ReviewQueueRepository>,
}

impl ApproveReviewUseCase {
    pub fn new(review_repository: Arc<dyn ReviewQueueRepository>) -> Self {
        Self { review_repository }
    }

    pub async fn execute(&self, review_id: i64) -> Result<JobPosting, ApproveReviewError> {
        let review = self
            .review_repository
            .find_by_id(review_id)
            .await?
            .ok_or(ApproveReviewError::ReviewNotFound(review_id))?;

        if !review.status.is_pending() {
            return Err(ApproveReviewError::AlreadyResolved {
                id: review_id,
                status: review.status,
            });
        }

        let new_job = review
            .to_job_posting()
            .map_err(ApproveReviewError::InvalidPayload)?;

        // The repository re-checks the status inside its own critical section,
        // so a concurrent approval still fails here.
        let job = self.review_repository.approve(review_id, new_job).await?;

        tracing::info!(
            "Approved review {} as job {} ({})",
            review_id,
            job.id,
            job.title
        );
        Ok(job)
    }
}
