use async_trait::async_trait;

use std::collections::BTreeMap;
use std::sync::atomic::AtomicI64;

use super::{InMemoryStore, insert_job, next_id};
use crate::domain::entities::{JobPosting, NewJobPosting, NewReviewItem, ReviewQueueItem};
use crate::domain::repositories::{RepositoryError, ReviewQueueRepository};
use crate::domain::value_objects::ReviewStatus;
use crate::domain::value_objects::timestamp::now_iso;

fn push_review(
    seq: &AtomicI64,
    reviews: &mut BTreeMap<i64, ReviewQueueItem>,
    item: NewReviewItem,
) -> ReviewQueueItem {
    let id = next_id(seq);
    let created = ReviewQueueItem {
        id,
        source_type: item.source_type,
        payload: item.payload,
        confidence: item.confidence,
        status: ReviewStatus::Pending,
        created_at: now_iso(),
        reviewed_at: None,
    };
    reviews.insert(id, created.clone());
    created
}

fn ensure_pending(item: &ReviewQueueItem) -> Result<(), RepositoryError> {
    if item.status.is_pending() {
        Ok(())
    } else {
        Err(RepositoryError::ValidationError(format!(
            "review {} is already {}",
            item.id, item.status
        )))
    }
}

#[async_trait]
impl ReviewQueueRepository for InMemoryStore {
    async fn find_all(&self, status: Option<ReviewStatus>) -> Result<Vec<ReviewQueueItem>, RepositoryError> {
        let reviews = self.reviews.read().await;
        Ok(reviews
            .values()
            .rev()
            .filter(|item| status.is_none_or(|status| item.status == status))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ReviewQueueItem>, RepositoryError> {
        Ok(self.reviews.read().await.get(&id).cloned())
    }

    async fn create(&self, item: NewReviewItem) -> Result<ReviewQueueItem, RepositoryError> {
        let mut reviews = self.reviews.write().await;
        Ok(push_review(&self.review_seq, &mut reviews, item))
    }

    async fn create_unless_duplicate(
        &self,
        company_id: i64,
        title: &str,
        url: &str,
        item: NewReviewItem,
    ) -> Result<Option<ReviewQueueItem>, RepositoryError> {
        let jobs = self.jobs.read().await;
        let mut reviews = self.reviews.write().await;

        let covered = reviews
            .values()
            .any(|review| review.matches_crawl_target(company_id, title, url))
            || jobs
                .values()
                .any(|job| job.matches_crawl_target(company_id, title, url));
        if covered {
            return Ok(None);
        }
        Ok(Some(push_review(&self.review_seq, &mut reviews, item)))
    }

    async fn approve(&self, id: i64, job: NewJobPosting) -> Result<JobPosting, RepositoryError> {
        let companies = self.companies.read().await;
        let mut jobs = self.jobs.write().await;
        let mut reviews = self.reviews.write().await;

        let item = reviews
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found("review", id))?;
        ensure_pending(item)?;

        let now = now_iso();
        let created = insert_job(&self.job_seq, &companies, &mut jobs, job, &now)?;
        item.status = ReviewStatus::Approved;
        item.reviewed_at = Some(now);
        Ok(created)
    }

    async fn reject(&self, id: i64) -> Result<ReviewQueueItem, RepositoryError> {
        let mut reviews = self.reviews.write().await;
        let item = reviews
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found("review", id))?;
        ensure_pending(item)?;

        item.status = ReviewStatus::Rejected;
        item.reviewed_at = Some(now_iso());
        Ok(item.clone())
    }

    async fn count_by_status(&self, status: ReviewStatus) -> Result<usize, RepositoryError> {
        let reviews = self.reviews.read().await;
        Ok(reviews.values().filter(|item| item.status == status).count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{JobPostingChanges, NewCompany};
    use crate::domain::repositories::{CompanyRepository, JobPostingRepository};
    use std::sync::Arc;

    fn item(title: &str) -> NewReviewItem {
        NewReviewItem {
            source_type: "manual".to_string(),
            payload: BTreeMap::from([
                ("companyId".to_string(), "1".to_string()),
                ("title".to_string(), title.to_string()),
                ("sourceUrl".to_string(), "https://a.test".to_string()),
            ]),
            confidence: None,
        }
    }

    #[tokio::test]
    async fn test_listing_is_newest_first_and_filterable() {
        let store = InMemoryStore::new();
        let first = ReviewQueueRepository::create(&store, item("first")).await.unwrap();
        let second = ReviewQueueRepository::create(&store, item("second")).await.unwrap();
        store.reject(first.id).await.unwrap();

        let all = ReviewQueueRepository::find_all(&store, None).await.unwrap();
        let ids: Vec<i64> = all.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);

        let pending = ReviewQueueRepository::find_all(&store, Some(ReviewStatus::Pending))
            .await
            .unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, second.id);
        assert_eq!(store.count_by_status(ReviewStatus::Rejected).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_approve_with_missing_company_leaves_item_pending() {
        let store = InMemoryStore::new();
        let created = ReviewQueueRepository::create(&store, item("orphan")).await.unwrap();
        let job = created.to_job_posting().unwrap();

        let err = store.approve(created.id, job).await.unwrap_err();
        assert!(matches!(err, RepositoryError::ValidationError(_)));

        let reloaded = ReviewQueueRepository::find_by_id(&store, created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reloaded.status, ReviewStatus::Pending);
        assert_eq!(reloaded.reviewed_at, None);
    }

    #[tokio::test]
    async fn test_duplicate_guard_ignores_resolved_items() {
        let store = InMemoryStore::new();
        let first = store
            .create_unless_duplicate(1, "A Intern", "https://a.test", item("A Intern"))
            .await
            .unwrap()
            .unwrap();
        assert!(store
            .create_unless_duplicate(1, "A Intern", "https://a.test", item("A Intern"))
            .await
            .unwrap()
            .is_none());

        store.reject(first.id).await.unwrap();
        assert!(store
            .create_unless_duplicate(1, "A Intern", "https://a.test", item("A Intern"))
            .await
            .unwrap()
            .is_some());
        assert_eq!(store.count_by_status(ReviewStatus::Pending).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_guard_honors_open_jobs_only() {
        let store = InMemoryStore::new();
        let company = CompanyRepository::create(&store, NewCompany::new("A", None, None, true).unwrap())
            .await
            .unwrap();
        let mut job = NewJobPosting::new(company.id, "A Intern").unwrap();
        job.apply_url = Some("https://a.test/jobs".to_string());
        let job = JobPostingRepository::create(&store, job).await.unwrap();

        let blocked = store
            .create_unless_duplicate(company.id, "A Intern", "https://a.test/jobs", item("A Intern"))
            .await
            .unwrap();
        assert!(blocked.is_none());

        JobPostingRepository::update(
            &store,
            job.id,
            JobPostingChanges {
                status: Some("closed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let queued = store
            .create_unless_duplicate(company.id, "A Intern", "https://a.test/jobs", item("A Intern"))
            .await
            .unwrap();
        assert!(queued.is_some());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_guarded_creates_queue_once() {
        for _ in 0..50 {
            let store = Arc::new(InMemoryStore::new());
            let tasks: Vec<_> = (0..8)
                .map(|_| {
                    let store = store.clone();
                    tokio::spawn(async move {
                        store
                            .create_unless_duplicate(1, "A Intern", "https://a.test", item("A Intern"))
                            .await
                            .unwrap()
                    })
                })
                .collect();

            let mut queued = 0;
            for task in tasks {
                if task.await.unwrap().is_some() {
                    queued += 1;
                }
            }
            assert_eq!(queued, 1);
            assert_eq!(store.count_by_status(ReviewStatus::Pending).await.unwrap(), 1);
        }
    }
}
