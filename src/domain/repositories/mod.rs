pub mod application_repository;
pub mod company_repository;
pub mod interview_round_repository;
pub mod job_posting_repository;
pub mod repository_error;
pub mod review_queue_repository;

pub use application_repository::ApplicationRepository;
pub use company_repository::CompanyRepository;
pub use interview_round_repository::InterviewRoundRepository;
pub use job_posting_repository::JobPostingRepository;
pub use repository_error::RepositoryError;
pub use review_queue_repository::ReviewQueueRepository;
