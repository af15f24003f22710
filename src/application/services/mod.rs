pub mod page_classifier;

pub use page_classifier::{PageKind, extract_title, infer_job_title};
