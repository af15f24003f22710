#[derive(Debug, Clone, PartialEq)]
pub struct InterviewRound {
    pub id: i64,
    pub application_id: i64,
    pub round_no: i32,
    pub scheduled_at: Option<String>,
    pub outcome: Option<String>,
    pub note: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewInterviewRound {
    pub round_no: i32,
    pub scheduled_at: Option<String>,
    pub outcome: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterviewRoundChanges {
    pub round_no: Option<i32>,
    pub scheduled_at: Option<String>,
    pub outcome: Option<String>,
    pub note: Option<String>,
}

impl InterviewRoundChanges {
    pub fn is_empty(&self) -> bool {
        self.round_no.is_none()
            && self.scheduled_at.is_none()
            && self.outcome.is_none()
            && self.note.is_none()
    }

    pub fn apply_to(&self, current: &InterviewRound) -> InterviewRound {
        InterviewRound {
            id: current.id,
            application_id: current.application_id,
            round_no: self.round_no.unwrap_or(current.round_no),
            scheduled_at: self
                .scheduled_at
                .clone()
                .or_else(|| current.scheduled_at.clone()),
            outcome: self.outcome.clone().or_else(|| current.outcome.clone()),
            note: self.note.clone().or_else(|| current.note.clone()),
            created_at: current.created_at.clone(),
        }
    }
}
