use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::BigInt;

use super::postgres_job_posting_repository::{has_open_match, insert_job_posting};
use crate::domain::entities::{JobPosting, NewJobPosting, NewReviewItem, ReviewQueueItem};
use crate::domain::repositories::{RepositoryError, ReviewQueueRepository};
use crate::domain::value_objects::ReviewStatus;
use crate::domain::value_objects::timestamp::now_iso;
use crate::infrastructure::database::connection::{DbPool, run_in_transaction};
use crate::infrastructure::database::models::{
    NewJobPostingModel, NewReviewItemModel, ResolveReviewItemModel, ReviewItemModel,
};
use crate::infrastructure::database::schema::review_queue;

pub struct PostgresReviewQueueRepository {
    pool: DbPool,
}

impl PostgresReviewQueueRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_domain(model: ReviewItemModel) -> Result<ReviewQueueItem, RepositoryError> {
    ReviewQueueItem::try_from(model).map_err(RepositoryError::DatabaseError)
}

/// Locks a review row and checks it is still pending.
fn lock_pending(conn: &mut PgConnection, id: i64) -> Result<ReviewQueueItem, RepositoryError> {
    let model = review_queue::table
        .find(id)
        .select(ReviewItemModel::as_select())
        .for_update()
        .first(conn)
        .optional()?
        .ok_or_else(|| RepositoryError::not_found("review", id))?;

    let item = to_domain(model)?;
    if !item.status.is_pending() {
        return Err(RepositoryError::ValidationError(format!(
            "review {} is already {}",
            item.id, item.status
        )));
    }
    Ok(item)
}

fn resolve(
    conn: &mut PgConnection,
    id: i64,
    status: ReviewStatus,
    now: String,
) -> Result<ReviewItemModel, RepositoryError> {
    Ok(diesel::update(review_queue::table.find(id))
        .set(&ResolveReviewItemModel {
            status: status.as_str().to_string(),
            reviewed_at: now,
        })
        .returning(ReviewItemModel::as_returning())
        .get_result(conn)?)
}

#[async_trait]
impl ReviewQueueRepository for PostgresReviewQueueRepository {
    async fn find_all(&self, status: Option<ReviewStatus>) -> Result<Vec<ReviewQueueItem>, RepositoryError> {
        let models = run_in_transaction(&self.pool, move |conn| {
            let mut query = review_queue::table
                .order(review_queue::id.desc())
                .select(ReviewItemModel::as_select())
                .into_boxed();
            if let Some(status) = status {
                query = query.filter(review_queue::status.eq(status.as_str()));
            }
            Ok(query.load(conn)?)
        })
        .await?;

        models.into_iter().map(to_domain).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ReviewQueueItem>, RepositoryError> {
        let model = run_in_transaction(&self.pool, move |conn| {
            Ok(review_queue::table
                .find(id)
                .select(ReviewItemModel::as_select())
                .first(conn)
                .optional()?)
        })
        .await?;

        model.map(to_domain).transpose()
    }

    async fn create(&self, item: NewReviewItem) -> Result<ReviewQueueItem, RepositoryError> {
        let new_model =
            NewReviewItemModel::new(item, now_iso()).map_err(RepositoryError::ValidationError)?;

        let model = run_in_transaction(&self.pool, move |conn| {
            Ok(diesel::insert_into(review_queue::table)
                .values(&new_model)
                .returning(ReviewItemModel::as_returning())
                .get_result(conn)?)
        })
        .await?;

        to_domain(model)
    }

    async fn approve(&self, id: i64, job: NewJobPosting) -> Result<JobPosting, RepositoryError> {
        let now = now_iso();
        let new_job = NewJobPostingModel::new(job, now.clone());

        let model = run_in_transaction(&self.pool, move |conn| {
            lock_pending(conn, id)?;
            let created = insert_job_posting(conn, &new_job)?;
            resolve(conn, id, ReviewStatus::Approved, now)?;
            Ok(created)
        })
        .await?;

        Ok(model.into())
    }

    async fn reject(&self, id: i64) -> Result<ReviewQueueItem, RepositoryError> {
        let now = now_iso();

        let model = run_in_transaction(&self.pool, move |conn| {
            lock_pending(conn, id)?;
            resolve(conn, id, ReviewStatus::Rejected, now)
        })
        .await?;

        to_domain(model)
    }

    async fn create_unless_duplicate(
        &self,
        company_id: i64,
        title: &str,
        url: &str,
        item: NewReviewItem,
    ) -> Result<Option<ReviewQueueItem>, RepositoryError> {
        let title = title.to_string();
        let url = url.to_string();
        let new_model =
            NewReviewItemModel::new(item, now_iso()).map_err(RepositoryError::ValidationError)?;

        let model = run_in_transaction(&self.pool, move |conn| {
            // Serializes crawler inserts per company until commit.
            diesel::sql_query("SELECT pg_advisory_xact_lock($1)")
                .bind::<BigInt, _>(company_id)
                .execute(conn)?;

            let pending: Vec<ReviewItemModel> = review_queue::table
                .filter(review_queue::status.eq(ReviewStatus::Pending.as_str()))
                .select(ReviewItemModel::as_select())
                .load(conn)?;
            for model in pending {
                if to_domain(model)?.matches_crawl_target(company_id, &title, &url) {
                    return Ok(None);
                }
            }
            if has_open_match(conn, company_id, &title, &url)? {
                return Ok(None);
            }

            Ok(Some(
                diesel::insert_into(review_queue::table)
                    .values(&new_model)
                    .returning(ReviewItemModel::as_returning())
                    .get_result(conn)?,
            ))
        })
        .await?;

        model.map(to_domain).transpose()
    }

    async fn count_by_status(&self, status: ReviewStatus) -> Result<usize, RepositoryError> {
        let count: i64 = run_in_transaction(&self.pool, move |conn| {
            Ok(review_queue::table
                .filter(review_queue::status.eq(status.as_str()))
                .count()
                .get_result(conn)?)
        })
        .await?;

        Ok(count as usize)
    }
}
