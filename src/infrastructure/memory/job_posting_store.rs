use async_trait::async_trait;

use super::{InMemoryStore, detach_applications, insert_job};
use crate::domain::entities::{JobPosting, JobPostingChanges, NewJobPosting};
use crate::domain::repositories::{JobPostingRepository, RepositoryError};
use crate::domain::value_objects::timestamp::now_iso;

#[async_trait]
impl JobPostingRepository for InMemoryStore {
    async fn find_all(&self, company_id: Option<i64>) -> Result<Vec<JobPosting>, RepositoryError> {
        let jobs = self.jobs.read().await;
        Ok(jobs
            .values()
            .filter(|job| company_id.is_none_or(|id| job.company_id == id))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<JobPosting>, RepositoryError> {
        Ok(self.jobs.read().await.get(&id).cloned())
    }

    async fn create(&self, job: NewJobPosting) -> Result<JobPosting, RepositoryError> {
        let companies = self.companies.read().await;
        let mut jobs = self.jobs.write().await;
        insert_job(&self.job_seq, &companies, &mut jobs, job, &now_iso())
    }

    async fn update(&self, id: i64, changes: JobPostingChanges) -> Result<Option<JobPosting>, RepositoryError> {
        let mut jobs = self.jobs.write().await;
        let Some(current) = jobs.get(&id) else {
            return Ok(None);
        };
        let updated = changes.apply_to(current, &now_iso());
        jobs.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let mut jobs = self.jobs.write().await;
        let mut applications = self.applications.write().await;

        if jobs.remove(&id).is_none() {
            return Ok(false);
        }
        detach_applications(&mut applications, &[id], &now_iso());
        Ok(true)
    }
}
