pub mod postgres_application_repository;
pub mod postgres_company_repository;
pub mod postgres_interview_round_repository;
pub mod postgres_job_posting_repository;
pub mod postgres_review_queue_repository;

pub use postgres_application_repository::PostgresApplicationRepository;
pub use postgres_company_repository::PostgresCompanyRepository;
pub use postgres_interview_round_repository::PostgresInterviewRoundRepository;
pub use postgres_job_posting_repository::PostgresJobPostingRepository;
pub use postgres_review_queue_repository::PostgresReviewQueueRepository;

use diesel::prelude::*;

use crate::infrastructure::database::schema::applications;

/// Clears `job_posting_id` on applications referencing any of `job_ids`.
pub(crate) fn detach_applications(
    conn: &mut PgConnection,
    job_ids: &[i64],
    now: &str,
) -> QueryResult<usize> {
    if job_ids.is_empty() {
        return Ok(0);
    }

    diesel::update(applications::table.filter(applications::job_posting_id.eq_any(job_ids)))
        .set((
            applications::job_posting_id.eq(None::<i64>),
            applications::updated_at.eq(now),
        ))
        .execute(conn)
}
