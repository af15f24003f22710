use chrono::Utc;
use std::sync::Arc;

use crate::domain::entities::Overview;
use crate::domain::repositories::{
    ApplicationRepository, InterviewRoundRepository, RepositoryError, ReviewQueueRepository,
};
use crate::domain::value_objects::ReviewStatus;

pub struct GetOverviewUseCase {
    application_repository: Arc<dyn ApplicationRepository>,
    round_repository: Arc<dyn InterviewRoundRepository>,
    review_repository: Arc<dyn ReviewQueueRepository>,
}

impl GetOverviewUseCase {
    pub fn new(
        application_repository: Arc<dyn ApplicationRepository>,
        round_repository: Arc<dyn InterviewRoundRepository>,
        review_repository: Arc<dyn ReviewQueueRepository>,
    ) -> Self {
        Self {
            application_repository,
            round_repository,
            review_repository,
        }
    }

    pub async fn execute(&self) -> Result<Overview, RepositoryError> {
        let applications = self.application_repository.find_all(None).await?;
        let rounds = self.round_repository.find_all().await?;
        let pending_reviews = self
            .review_repository
            .count_by_status(ReviewStatus::Pending)
            .await?;

        Ok(Overview::compute(
            Utc::now(),
            &applications,
            &rounds,
            pending_reviews,
        ))
    }
}
