pub mod application_routes;
pub mod company_routes;
pub mod crawler_routes;
pub mod health_routes;
pub mod interview_round_routes;
pub mod job_posting_routes;
pub mod review_queue_routes;

pub use application_routes::*;
pub use company_routes::*;
pub use crawler_routes::*;
pub use health_routes::*;
pub use interview_round_routes::*;
pub use job_posting_routes::*;
pub use review_queue_routes::*;
