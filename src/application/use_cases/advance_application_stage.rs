use std::sync::Arc;

use crate::domain::entities::{ApplicationChanges, JobApplication};
use crate::domain::repositories::{ApplicationRepository, RepositoryError};

/// Moves an application one step along the pipeline.
pub struct AdvanceApplicationStageUseCase {
    application_repository: Arc<dyn ApplicationRepository>,
}

impl AdvanceApplicationStageUseCase {
    pub fn new(application_repository: Arc<dyn ApplicationRepository>) -> Self {
        Self {
            application_repository,
        }
    }

    pub async fn execute(&self, application_id: i64) -> Result<JobApplication, RepositoryError> {
        let current = self
            .application_repository
            .find_by_id(application_id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("application", application_id))?;

        let next = current.stage.next();
        if next == current.stage {
            return Ok(current);
        }

        let updated = self
            .application_repository
            .update(application_id, ApplicationChanges::stage(next))
            .await?
            .ok_or_else(|| RepositoryError::not_found("application", application_id))?;

        tracing::info!(
            "Application {} moved from {} to {}",
            application_id,
            current.stage,
            updated.stage
        );
        Ok(updated)
    }
}
