use std::sync::Arc;

use crate::domain::entities::ReviewQueueItem;
use crate::domain::repositories::{RepositoryError, ReviewQueueRepository};

pub struct RejectReviewUseCase {
    review_repository: Arc<dyn ReviewQueueRepository>,
}

impl RejectReviewUseCase {
    pub fn new(review_repository: Arc<dyn ReviewQueueRepository>) -> Self {
        Self { review_repository }
    }

    pub async fn execute(&self, review_id: i64) -> Result<ReviewQueueItem, RepositoryError> {
        let rejected = self.review_repository.reject(review_id).await?;
        tracing::info!("Rejected review {}", review_id);
        Ok(rejected)
    }
}
