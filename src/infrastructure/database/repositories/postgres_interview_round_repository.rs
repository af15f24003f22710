use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::entities::{InterviewRound, InterviewRoundChanges, NewInterviewRound};
use crate::domain::repositories::{InterviewRoundRepository, RepositoryError};
use crate::domain::value_objects::timestamp::now_iso;
use crate::infrastructure::database::connection::{DbPool, run_in_transaction};
use crate::infrastructure::database::models::{
    InterviewRoundModel, NewInterviewRoundModel, UpdateInterviewRoundModel,
};
use crate::infrastructure::database::schema::{applications, interview_rounds};

pub struct PostgresInterviewRoundRepository {
    pool: DbPool,
}

impl PostgresInterviewRoundRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InterviewRoundRepository for PostgresInterviewRoundRepository {
    async fn find_all(&self) -> Result<Vec<InterviewRound>, RepositoryError> {
        let models = run_in_transaction(&self.pool, |conn| {
            Ok(interview_rounds::table
                .order(interview_rounds::id.asc())
                .select(InterviewRoundModel::as_select())
                .load(conn)?)
        })
        .await?;

        Ok(models.into_iter().map(InterviewRound::from).collect())
    }

    async fn find_by_application(&self, application_id: i64) -> Result<Vec<InterviewRound>, RepositoryError> {
        let models = run_in_transaction(&self.pool, move |conn| {
            Ok(interview_rounds::table
                .filter(interview_rounds::application_id.eq(application_id))
                .order((interview_rounds::round_no.asc(), interview_rounds::id.asc()))
                .select(InterviewRoundModel::as_select())
                .load(conn)?)
        })
        .await?;

        Ok(models.into_iter().map(InterviewRound::from).collect())
    }

    async fn create(
        &self,
        application_id: i64,
        round: NewInterviewRound,
    ) -> Result<InterviewRound, RepositoryError> {
        let new_model = NewInterviewRoundModel::new(application_id, round, now_iso());

        let model = run_in_transaction(&self.pool, move |conn| {
            let exists = applications::table
                .find(application_id)
                .select(applications::id)
                .first::<i64>(conn)
                .optional()?
                .is_some();
            if !exists {
                return Err(RepositoryError::ValidationError(format!(
                    "applicationId {} does not exist",
                    application_id
                )));
            }

            Ok(diesel::insert_into(interview_rounds::table)
                .values(&new_model)
                .returning(InterviewRoundModel::as_returning())
                .get_result(conn)?)
        })
        .await?;

        Ok(model.into())
    }

    async fn update(
        &self,
        id: i64,
        changes: InterviewRoundChanges,
    ) -> Result<Option<InterviewRound>, RepositoryError> {
        let is_empty = changes.is_empty();
        let update_model = UpdateInterviewRoundModel::from(changes);

        let model = run_in_transaction(&self.pool, move |conn| {
            let query = interview_rounds::table
                .find(id)
                .select(InterviewRoundModel::as_select());

            // diesel refuses an UPDATE without columns
            if is_empty {
                return Ok(query.first(conn).optional()?);
            }

            Ok(diesel::update(interview_rounds::table.find(id))
                .set(&update_model)
                .returning(InterviewRoundModel::as_returning())
                .get_result(conn)
                .optional()?)
        })
        .await?;

        Ok(model.map(InterviewRound::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        run_in_transaction(&self.pool, move |conn| {
            let deleted = diesel::delete(interview_rounds::table.find(id)).execute(conn)?;
            Ok(deleted > 0)
        })
        .await
    }
}
