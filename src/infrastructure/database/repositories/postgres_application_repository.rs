use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::entities::{ApplicationChanges, JobApplication, NewApplication};
use crate::domain::repositories::{ApplicationRepository, RepositoryError};
use crate::domain::value_objects::Stage;
use crate::domain::value_objects::timestamp::now_iso;
use crate::infrastructure::database::connection::{DbPool, run_in_transaction};
use crate::infrastructure::database::models::{
    ApplicationModel, NewApplicationModel, UpdateApplicationModel,
};
use crate::infrastructure::database::schema::{applications, job_postings};

pub struct PostgresApplicationRepository {
    pool: DbPool,
}

impl PostgresApplicationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_domain(model: ApplicationModel) -> Result<JobApplication, RepositoryError> {
    JobApplication::try_from(model).map_err(|e| {
        RepositoryError::DatabaseError(format!("Failed to convert application model: {}", e))
    })
}

#[async_trait]
impl ApplicationRepository for PostgresApplicationRepository {
    async fn find_all(&self, stage: Option<Stage>) -> Result<Vec<JobApplication>, RepositoryError> {
        let models = run_in_transaction(&self.pool, move |conn| {
            let mut query = applications::table
                .order(applications::id.asc())
                .select(ApplicationModel::as_select())
                .into_boxed();
            if let Some(stage) = stage {
                query = query.filter(applications::stage.eq(stage.label()));
            }
            Ok(query.load(conn)?)
        })
        .await?;

        models.into_iter().map(to_domain).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<JobApplication>, RepositoryError> {
        let model = run_in_transaction(&self.pool, move |conn| {
            Ok(applications::table
                .find(id)
                .select(ApplicationModel::as_select())
                .first(conn)
                .optional()?)
        })
        .await?;

        model.map(to_domain).transpose()
    }

    async fn create(&self, application: NewApplication) -> Result<JobApplication, RepositoryError> {
        let new_model = NewApplicationModel::new(application, now_iso());

        let model = run_in_transaction(&self.pool, move |conn| {
            if let Some(job_id) = new_model.job_posting_id {
                let exists = job_postings::table
                    .find(job_id)
                    .select(job_postings::id)
                    .first::<i64>(conn)
                    .optional()?
                    .is_some();
                if !exists {
                    return Err(RepositoryError::ValidationError(format!(
                        "jobPostingId {} does not exist",
                        job_id
                    )));
                }
            }

            Ok(diesel::insert_into(applications::table)
                .values(&new_model)
                .returning(ApplicationModel::as_returning())
                .get_result(conn)?)
        })
        .await?;

        to_domain(model)
    }

    async fn update(
        &self,
        id: i64,
        changes: ApplicationChanges,
    ) -> Result<Option<JobApplication>, RepositoryError> {
        let update_model = UpdateApplicationModel::new(changes, now_iso());

        let model = run_in_transaction(&self.pool, move |conn| {
            Ok(diesel::update(applications::table.find(id))
                .set(&update_model)
                .returning(ApplicationModel::as_returning())
                .get_result(conn)
                .optional()?)
        })
        .await?;

        model.map(to_domain).transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        run_in_transaction(&self.pool, move |conn| {
            // interview_rounds rows go with it through ON DELETE CASCADE
            let deleted = diesel::delete(applications::table.find(id)).execute(conn)?;
            Ok(deleted > 0)
        })
        .await
    }
}
