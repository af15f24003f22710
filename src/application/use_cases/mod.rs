pub mod advance_application_stage;
pub mod approve_review;
pub mod get_overview;
pub mod reject_review;
pub mod run_crawler;

pub use advance_application_stage::AdvanceApplicationStageUseCase;
pub use approve_review::{ApproveReviewError, ApproveReviewUseCase};
pub use get_overview::GetOverviewUseCase;
pub use reject_review::RejectReviewUseCase;
pub use run_crawler::{CrawlRunResult, RunCrawlerUseCase};
