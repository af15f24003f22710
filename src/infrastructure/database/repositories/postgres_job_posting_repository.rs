use async_trait::async_trait;
use diesel::prelude::*;

use super::detach_applications;
use crate::domain::entities::{JobPosting, JobPostingChanges, NewJobPosting};
use crate::domain::repositories::{JobPostingRepository, RepositoryError};
use crate::domain::value_objects::timestamp::now_iso;
use crate::infrastructure::database::connection::{DbPool, run_in_transaction};
use crate::infrastructure::database::models::{
    JobPostingModel, NewJobPostingModel, UpdateJobPostingModel,
};
use crate::infrastructure::database::schema::{companies, job_postings};

pub struct PostgresJobPostingRepository {
    pool: DbPool,
}

impl PostgresJobPostingRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Open posting for `company_id` with the same title reachable at `url`.
pub(crate) fn has_open_match(
    conn: &mut PgConnection,
    company_id: i64,
    title: &str,
    url: &str,
) -> Result<bool, RepositoryError> {
    let candidates: Vec<JobPostingModel> = job_postings::table
        .filter(job_postings::company_id.eq(company_id))
        .filter(job_postings::title.eq(title))
        .select(JobPostingModel::as_select())
        .load(conn)?;

    Ok(candidates
        .into_iter()
        .map(JobPosting::from)
        .any(|job| job.matches_crawl_target(company_id, title, url)))
}

/// Inserts a posting after checking its company exists.
pub(crate) fn insert_job_posting(
    conn: &mut PgConnection,
    new_model: &NewJobPostingModel,
) -> Result<JobPostingModel, RepositoryError> {
    let company_exists = companies::table
        .find(new_model.company_id)
        .select(companies::id)
        .first::<i64>(conn)
        .optional()?
        .is_some();
    if !company_exists {
        return Err(RepositoryError::ValidationError(format!(
            "companyId {} does not exist",
            new_model.company_id
        )));
    }

    Ok(diesel::insert_into(job_postings::table)
        .values(new_model)
        .returning(JobPostingModel::as_returning())
        .get_result(conn)?)
}

#[async_trait]
impl JobPostingRepository for PostgresJobPostingRepository {
    async fn find_all(&self, company_id: Option<i64>) -> Result<Vec<JobPosting>, RepositoryError> {
        let models = run_in_transaction(&self.pool, move |conn| {
            let mut query = job_postings::table
                .order(job_postings::id.asc())
                .select(JobPostingModel::as_select())
                .into_boxed();
            if let Some(company_id) = company_id {
                query = query.filter(job_postings::company_id.eq(company_id));
            }
            Ok(query.load(conn)?)
        })
        .await?;

        Ok(models.into_iter().map(JobPosting::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<JobPosting>, RepositoryError> {
        let model = run_in_transaction(&self.pool, move |conn| {
            Ok(job_postings::table
                .find(id)
                .select(JobPostingModel::as_select())
                .first(conn)
                .optional()?)
        })
        .await?;

        Ok(model.map(JobPosting::from))
    }

    async fn create(&self, job: NewJobPosting) -> Result<JobPosting, RepositoryError> {
        let new_model = NewJobPostingModel::new(job, now_iso());
        let model =
            run_in_transaction(&self.pool, move |conn| insert_job_posting(conn, &new_model)).await?;
        Ok(model.into())
    }

    async fn update(&self, id: i64, changes: JobPostingChanges) -> Result<Option<JobPosting>, RepositoryError> {
        let update_model = UpdateJobPostingModel::new(changes, now_iso());

        let model = run_in_transaction(&self.pool, move |conn| {
            Ok(diesel::update(job_postings::table.find(id))
                .set(&update_model)
                .returning(JobPostingModel::as_returning())
                .get_result(conn)
                .optional()?)
        })
        .await?;

        Ok(model.map(JobPosting::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let now = now_iso();

        run_in_transaction(&self.pool, move |conn| {
            detach_applications(conn, &[id], &now)?;
            let deleted = diesel::delete(job_postings::table.find(id)).execute(conn)?;
            Ok(deleted > 0)
        })
        .await
    }
}
