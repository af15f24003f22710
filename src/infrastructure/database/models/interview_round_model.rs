use diesel::prelude::*;

use crate::domain::entities::{InterviewRound, InterviewRoundChanges, NewInterviewRound};
use crate::infrastructure::database::schema::interview_rounds;

#[derive(Debug, Queryable, Identifiable, Selectable)]
#[diesel(table_name = interview_rounds)]
#[diesel(primary_key(id))]
pub struct InterviewRoundModel {
    pub id: i64,
    pub application_id: i64,
    pub round_no: i32,
    pub scheduled_at: Option<String>,
    pub outcome: Option<String>,
    pub note: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = interview_rounds)]
pub struct NewInterviewRoundModel {
    pub application_id: i64,
    pub round_no: i32,
    pub scheduled_at: Option<String>,
    pub outcome: Option<String>,
    pub note: Option<String>,
    pub created_at: String,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = interview_rounds)]
pub struct UpdateInterviewRoundModel {
    pub round_no: Option<i32>,
    pub scheduled_at: Option<String>,
    pub outcome: Option<String>,
    pub note: Option<String>,
}

impl NewInterviewRoundModel {
    pub fn new(application_id: i64, round: NewInterviewRound, now: String) -> Self {
        Self {
            application_id,
            round_no: round.round_no,
            scheduled_at: round.scheduled_at,
            outcome: round.outcome,
            note: round.note,
            created_at: now,
        }
    }
}

impl From<InterviewRoundChanges> for UpdateInterviewRoundModel {
    fn from(changes: InterviewRoundChanges) -> Self {
        Self {
            round_no: changes.round_no,
            scheduled_at: changes.scheduled_at,
            outcome: changes.outcome,
            note: changes.note,
        }
    }
}

impl From<InterviewRoundModel> for InterviewRound {
    fn from(model: InterviewRoundModel) -> Self {
        InterviewRound {
            id: model.id,
            application_id: model.application_id,
            round_no: model.round_no,
            scheduled_at: model.scheduled_at,
            outcome: model.outcome,
            note: model.note,
            created_at: model.created_at,
        }
    }
}
