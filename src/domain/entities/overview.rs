use chrono::{DateTime, Duration, Utc};

use super::{InterviewRound, JobApplication};
use crate::domain::value_objects::timestamp::parse_instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overview {
    pub upcoming_deadlines: usize,
    pub interviews_this_week: usize,
    pub pending_reviews: usize,
}

impl Overview {
    /// Dashboard counters as of `now`. Unparseable timestamps are ignored.
    pub fn compute(
        now: DateTime<Utc>,
        applications: &[JobApplication],
        rounds: &[InterviewRound],
        pending_reviews: usize,
    ) -> Self {
        let upcoming_deadlines = applications
            .iter()
            .filter_map(|app| app.deadline_at.as_deref().and_then(parse_instant))
            .filter(|deadline| *deadline > now)
            .count();

        let week_end = now + Duration::days(7);
        let interviews_this_week = rounds
            .iter()
            .filter_map(|round| round.scheduled_at.as_deref().and_then(parse_instant))
            .filter(|at| *at >= now && *at <= week_end)
            .count();

        Self {
            upcoming_deadlines,
            interviews_this_week,
            pending_reviews,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Stage, timestamp::format_instant};

    fn app(deadline: Option<String>) -> JobApplication {
        JobApplication {
            id: 1,
            job_posting_id: None,
            company_name: "Unitree".to_string(),
            role: "Intern".to_string(),
            applied_at: None,
            deadline_at: deadline,
            stage: Stage::Applied,
            notes: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn round(scheduled: Option<String>) -> InterviewRound {
        InterviewRound {
            id: 1,
            application_id: 1,
            round_no: 1,
            scheduled_at: scheduled,
            outcome: None,
            note: None,
            created_at: String::new(),
        }
    }

    #[test]
    fn test_counts_future_deadlines_and_this_weeks_rounds() {
        let now = Utc::now();
        let apps = vec![
            app(Some(format_instant(now + Duration::days(3)))),
            app(Some(format_instant(now - Duration::days(1)))),
            app(Some("not a date".to_string())),
            app(None),
        ];
        let rounds = vec![
            round(Some(format_instant(now + Duration::days(2)))),
            round(Some(format_instant(now + Duration::days(8)))),
            round(Some(format_instant(now - Duration::hours(1)))),
            round(None),
        ];

        let overview = Overview::compute(now, &apps, &rounds, 5);
        assert_eq!(overview.upcoming_deadlines, 1);
        assert_eq!(overview.interviews_this_week, 1);
        assert_eq!(overview.pending_reviews, 5);
    }
}
