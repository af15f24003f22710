pub mod application_handler;
pub mod company_handler;
pub mod crawler_handler;
pub mod interview_round_handler;
pub mod job_posting_handler;
pub mod overview_handler;
pub mod review_queue_handler;

pub use application_handler::ApplicationHandler;
pub use company_handler::CompanyHandler;
pub use crawler_handler::CrawlerHandler;
pub use interview_round_handler::InterviewRoundHandler;
pub use job_posting_handler::JobPostingHandler;
pub use overview_handler::OverviewHandler;
pub use review_queue_handler::ReviewQueueHandler;
