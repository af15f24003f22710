use async_trait::async_trait;

use super::{InMemoryStore, next_id};
use crate::domain::entities::{InterviewRound, InterviewRoundChanges, NewInterviewRound};
use crate::domain::repositories::{InterviewRoundRepository, RepositoryError};
use crate::domain::value_objects::timestamp::now_iso;

#[async_trait]
impl InterviewRoundRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<InterviewRound>, RepositoryError> {
        Ok(self.rounds.read().await.values().cloned().collect())
    }

    async fn find_by_application(&self, application_id: i64) -> Result<Vec<InterviewRound>, RepositoryError> {
        let rounds = self.rounds.read().await;
        let mut matching: Vec<InterviewRound> = rounds
            .values()
            .filter(|round| round.application_id == application_id)
            .cloned()
            .collect();
        matching.sort_by_key(|round| (round.round_no, round.id));
        Ok(matching)
    }

    async fn create(
        &self,
        application_id: i64,
        round: NewInterviewRound,
    ) -> Result<InterviewRound, RepositoryError> {
        let applications = self.applications.read().await;
        let mut rounds = self.rounds.write().await;

        if !applications.contains_key(&application_id) {
            return Err(RepositoryError::ValidationError(format!(
                "applicationId {} does not exist",
                application_id
            )));
        }

        let id = next_id(&self.round_seq);
        let created = InterviewRound {
            id,
            application_id,
            round_no: round.round_no,
            scheduled_at: round.scheduled_at,
            outcome: round.outcome,
            note: round.note,
            created_at: now_iso(),
        };
        rounds.insert(id, created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: i64,
        changes: InterviewRoundChanges,
    ) -> Result<Option<InterviewRound>, RepositoryError> {
        let mut rounds = self.rounds.write().await;
        let Some(current) = rounds.get(&id) else {
            return Ok(None);
        };
        let updated = changes.apply_to(current);
        rounds.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        Ok(self.rounds.write().await.remove(&id).is_some())
    }
}
