use async_trait::async_trait;

use super::{InMemoryStore, detach_applications, next_id};
use crate::domain::entities::{Company, CompanyChanges, NewCompany};
use crate::domain::repositories::{CompanyRepository, RepositoryError};
use crate::domain::value_objects::timestamp::now_iso;

fn duplicate_name(name: &str) -> RepositoryError {
    RepositoryError::ValidationError(format!("company name '{}' already exists", name))
}

#[async_trait]
impl CompanyRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Company>, RepositoryError> {
        Ok(self.companies.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Company>, RepositoryError> {
        Ok(self.companies.read().await.get(&id).cloned())
    }

    async fn create(&self, company: NewCompany) -> Result<Company, RepositoryError> {
        let mut companies = self.companies.write().await;
        if companies.values().any(|c| c.name == company.name) {
            return Err(duplicate_name(&company.name));
        }

        let id = next_id(&self.company_seq);
        let now = now_iso();
        let created = Company {
            id,
            name: company.name,
            official_site: company.official_site,
            careers_url: company.careers_url,
            active: company.active,
            created_at: now.clone(),
            updated_at: now,
        };
        companies.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, changes: CompanyChanges) -> Result<Option<Company>, RepositoryError> {
        let mut companies = self.companies.write().await;
        let Some(current) = companies.get(&id) else {
            return Ok(None);
        };

        if let Some(name) = &changes.name {
            if companies.values().any(|c| c.id != id && &c.name == name) {
                return Err(duplicate_name(name));
            }
        }

        let updated = changes.apply_to(current, &now_iso());
        companies.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let mut companies = self.companies.write().await;
        let mut jobs = self.jobs.write().await;
        let mut applications = self.applications.write().await;

        if companies.remove(&id).is_none() {
            return Ok(false);
        }

        let job_ids: Vec<i64> = jobs
            .values()
            .filter(|job| job.company_id == id)
            .map(|job| job.id)
            .collect();
        for job_id in &job_ids {
            jobs.remove(job_id);
        }
        detach_applications(&mut applications, &job_ids, &now_iso());

        tracing::debug!("Deleted company {} and {} job postings", id, job_ids.len());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{NewApplication, NewJobPosting};
    use crate::domain::repositories::{ApplicationRepository, JobPostingRepository};

    #[tokio::test]
    async fn test_create_then_fetch_round_trips() {
        let store = InMemoryStore::new();
        let created = CompanyRepository::create(
            &store,
            NewCompany::new(
                "Unitree",
                Some("https://unitree.com".to_string()),
                Some("https://unitree.com/careers".to_string()),
                true,
            )
            .unwrap(),
        )
        .await
        .unwrap();

        let fetched = CompanyRepository::find_by_id(&store, created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.id, 1);
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[tokio::test]
    async fn test_duplicate_names_rejected() {
        let store = InMemoryStore::new();
        let new_company = NewCompany::new("Agibot", None, None, true).unwrap();
        CompanyRepository::create(&store, new_company.clone()).await.unwrap();

        let err = CompanyRepository::create(&store, new_company).await.unwrap_err();
        assert!(matches!(err, RepositoryError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_update_missing_company() {
        let store = InMemoryStore::new();
        let result = CompanyRepository::update(&store, 3, CompanyChanges::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_cascades_to_jobs_and_detaches_applications() {
        let store = InMemoryStore::new();
        let doomed = CompanyRepository::create(&store, NewCompany::new("Doomed", None, None, true).unwrap())
            .await
            .unwrap();
        let kept = CompanyRepository::create(&store, NewCompany::new("Kept", None, None, true).unwrap())
            .await
            .unwrap();

        let doomed_job = JobPostingRepository::create(&store, NewJobPosting::new(doomed.id, "Engineer").unwrap())
            .await
            .unwrap();
        let kept_job = JobPostingRepository::create(&store, NewJobPosting::new(kept.id, "Engineer").unwrap())
            .await
            .unwrap();

        let mut linked = NewApplication::new("Doomed", "Engineer").unwrap();
        linked.job_posting_id = Some(doomed_job.id);
        let linked = ApplicationRepository::create(&store, linked).await.unwrap();

        let mut other = NewApplication::new("Kept", "Engineer").unwrap();
        other.job_posting_id = Some(kept_job.id);
        let other = ApplicationRepository::create(&store, other).await.unwrap();

        assert!(CompanyRepository::delete(&store, doomed.id).await.unwrap());
        assert!(!CompanyRepository::delete(&store, doomed.id).await.unwrap());

        let jobs = JobPostingRepository::find_all(&store, None).await.unwrap();
        assert_eq!(jobs, vec![kept_job.clone()]);

        let linked = ApplicationRepository::find_by_id(&store, linked.id).await.unwrap().unwrap();
        assert_eq!(linked.job_posting_id, None);
        let other = ApplicationRepository::find_by_id(&store, other.id).await.unwrap().unwrap();
        assert_eq!(other.job_posting_id, Some(kept_job.id));
    }
}
