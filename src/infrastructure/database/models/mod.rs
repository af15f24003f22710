pub mod application_model;
pub mod company_model;
pub mod interview_round_model;
pub mod job_posting_model;
pub mod review_item_model;

pub use application_model::*;
pub use company_model::*;
pub use interview_round_model::*;
pub use job_posting_model::*;
pub use review_item_model::*;
