pub mod review_status;
pub mod stage;
pub mod timestamp;

pub use review_status::ReviewStatus;
pub use stage::{PIPELINE, Stage};
