pub mod application;
pub mod company;
pub mod interview_round;
pub mod job_posting;
pub mod overview;
pub mod review_item;

pub use application::{ApplicationChanges, JobApplication, NewApplication};
pub use company::{Company, CompanyChanges, NewCompany};
pub use interview_round::{InterviewRound, InterviewRoundChanges, NewInterviewRound};
pub use job_posting::{JobPosting, JobPostingChanges, NewJobPosting};
pub use overview::Overview;
pub use review_item::{NewReviewItem, ReviewPayload, ReviewQueueItem};

/// Trimmed value of a required text field.
pub(crate) fn require_text(field: &str, value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{} must not be blank", field));
    }
    Ok(trimmed.to_string())
}
