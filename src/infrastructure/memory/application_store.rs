use async_trait::async_trait;

use super::{InMemoryStore, next_id};
use crate::domain::entities::{ApplicationChanges, JobApplication, NewApplication};
use crate::domain::repositories::{ApplicationRepository, RepositoryError};
use crate::domain::value_objects::Stage;
use crate::domain::value_objects::timestamp::now_iso;

#[async_trait]
impl ApplicationRepository for InMemoryStore {
    async fn find_all(&self, stage: Option<Stage>) -> Result<Vec<JobApplication>, RepositoryError> {
        let applications = self.applications.read().await;
        Ok(applications
            .values()
            .filter(|app| stage.is_none_or(|stage| app.stage == stage))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<JobApplication>, RepositoryError> {
        Ok(self.applications.read().await.get(&id).cloned())
    }

    async fn create(&self, application: NewApplication) -> Result<JobApplication, RepositoryError> {
        let jobs = self.jobs.read().await;
        let mut applications = self.applications.write().await;

        if let Some(job_id) = application.job_posting_id {
            if !jobs.contains_key(&job_id) {
                return Err(RepositoryError::ValidationError(format!(
                    "jobPostingId {} does not exist",
                    job_id
                )));
            }
        }

        let id = next_id(&self.application_seq);
        let now = now_iso();
        let created = JobApplication {
            id,
            job_posting_id: application.job_posting_id,
            company_name: application.company_name,
            role: application.role,
            applied_at: application.applied_at,
            deadline_at: application.deadline_at,
            stage: application.stage,
            notes: application.notes,
            created_at: now.clone(),
            updated_at: now,
        };
        applications.insert(id, created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: i64,
        changes: ApplicationChanges,
    ) -> Result<Option<JobApplication>, RepositoryError> {
        let mut applications = self.applications.write().await;
        let Some(current) = applications.get(&id) else {
            return Ok(None);
        };
        let updated = changes.apply_to(current, &now_iso());
        applications.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let mut applications = self.applications.write().await;
        let mut rounds = self.rounds.write().await;

        if applications.remove(&id).is_none() {
            return Ok(false);
        }
        rounds.retain(|_, round| round.application_id != id);
        Ok(true)
    }
}
