//! Process-local storage backend.
//!
//! Every table is a `BTreeMap` keyed by id behind its own `RwLock`, with an
//! atomic sequence handing out ids. Operations touching several tables take
//! the locks in declaration order (companies, jobs, applications, rounds,
//! reviews) so they cannot deadlock against each other.

pub mod application_store;
pub mod company_store;
pub mod job_posting_store;
pub mod review_queue_store;
pub mod round_store;

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::{
    Company, InterviewRound, JobApplication, JobPosting, NewJobPosting, ReviewQueueItem,
};
use crate::domain::repositories::RepositoryError;

#[derive(Default)]
pub struct InMemoryStore {
    companies: RwLock<BTreeMap<i64, Company>>,
    jobs: RwLock<BTreeMap<i64, JobPosting>>,
    applications: RwLock<BTreeMap<i64, JobApplication>>,
    rounds: RwLock<BTreeMap<i64, InterviewRound>>,
    reviews: RwLock<BTreeMap<i64, ReviewQueueItem>>,

    company_seq: AtomicI64,
    job_seq: AtomicI64,
    application_seq: AtomicI64,
    round_seq: AtomicI64,
    review_seq: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_id(seq: &AtomicI64) -> i64 {
    seq.fetch_add(1, Ordering::SeqCst) + 1
}

/// Inserts a posting into an already locked jobs table.
fn insert_job(
    seq: &AtomicI64,
    companies: &BTreeMap<i64, Company>,
    jobs: &mut BTreeMap<i64, JobPosting>,
    new_job: NewJobPosting,
    now: &str,
) -> Result<JobPosting, RepositoryError> {
    if !companies.contains_key(&new_job.company_id) {
        return Err(RepositoryError::ValidationError(format!(
            "companyId {} does not exist",
            new_job.company_id
        )));
    }

    let id = next_id(seq);
    let job = JobPosting {
        id,
        company_id: new_job.company_id,
        title: new_job.title,
        location: new_job.location,
        source_url: new_job.source_url,
        apply_url: new_job.apply_url,
        deadline_at: new_job.deadline_at,
        status: new_job.status,
        source_platform: new_job.source_platform,
        first_seen_at: now.to_string(),
        last_seen_at: now.to_string(),
    };
    jobs.insert(id, job.clone());
    Ok(job)
}

/// Clears the posting reference on applications pointing at `job_ids`.
fn detach_applications(
    applications: &mut BTreeMap<i64, JobApplication>,
    job_ids: &[i64],
    now: &str,
) {
    for app in applications.values_mut() {
        if app.job_posting_id.is_some_and(|id| job_ids.contains(&id)) {
            app.job_posting_id = None;
            app.updated_at = now.to_string();
        }
    }
}
