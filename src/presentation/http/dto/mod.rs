pub mod application_dto;
pub mod company_dto;
pub mod interview_round_dto;
pub mod job_posting_dto;
pub mod response_dto;
pub mod review_dto;

pub use application_dto::*;
pub use company_dto::*;
pub use interview_round_dto::*;
pub use job_posting_dto::*;
pub use response_dto::*;
pub use review_dto::*;
