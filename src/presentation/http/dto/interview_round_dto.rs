use serde::{Deserialize, Serialize};

use crate::domain::entities::{InterviewRound, InterviewRoundChanges, NewInterviewRound};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRoundDto {
    pub id: i64,
    pub application_id: i64,
    pub round_no: i32,
    pub scheduled_at: Option<String>,
    pub outcome: Option<String>,
    pub note: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterviewRoundRequestDto {
    pub round_no: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInterviewRoundRequestDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_no: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<InterviewRound> for InterviewRoundDto {
    fn from(round: InterviewRound) -> Self {
        Self {
            id: round.id,
            application_id: round.application_id,
            round_no: round.round_no,
            scheduled_at: round.scheduled_at,
            outcome: round.outcome,
            note: round.note,
            created_at: round.created_at,
        }
    }
}

impl From<CreateInterviewRoundRequestDto> for NewInterviewRound {
    fn from(request: CreateInterviewRoundRequestDto) -> Self {
        NewInterviewRound {
            round_no: request.round_no,
            scheduled_at: request.scheduled_at,
            outcome: request.outcome,
            note: request.note,
        }
    }
}

impl From<UpdateInterviewRoundRequestDto> for InterviewRoundChanges {
    fn from(request: UpdateInterviewRoundRequestDto) -> Self {
        InterviewRoundChanges {
            round_no: request.round_no,
            scheduled_at: request.scheduled_at,
            outcome: request.outcome,
            note: request.note,
        }
    }
}
