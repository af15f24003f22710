use std::collections::BTreeMap;

use super::job_posting::{DEFAULT_JOB_STATUS, NewJobPosting};
use crate::domain::value_objects::ReviewStatus;

pub type ReviewPayload = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewQueueItem {
    pub id: i64,
    pub source_type: String,
    pub payload: ReviewPayload,
    pub confidence: Option<f64>,
    pub status: ReviewStatus,
    pub created_at: String,
    pub reviewed_at: Option<String>,
}

impl ReviewQueueItem {
    /// Job posting described by the payload.
    ///
    /// `companyId` must be an integer and `title` must be non-blank; the other
    /// posting fields are copied when present.
    pub fn to_job_posting(&self) -> Result<NewJobPosting, String> {
        let company_id = self
            .payload
            .get("companyId")
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .ok_or_else(|| format!("review {} missing valid companyId", self.id))?;

        let title = self
            .payload
            .get("title")
            .filter(|title| !title.trim().is_empty())
            .ok_or_else(|| format!("review {} missing title", self.id))?;

        let mut posting = NewJobPosting::new(company_id, title)?;
        posting.location = self.payload.get("location").cloned();
        posting.source_url = self.payload.get("sourceUrl").cloned();
        posting.apply_url = self.payload.get("applyUrl").cloned();
        posting.deadline_at = self.payload.get("deadlineAt").cloned();
        posting.status = self
            .payload
            .get("status")
            .cloned()
            .unwrap_or_else(|| DEFAULT_JOB_STATUS.to_string());
        posting.source_platform = self.payload.get("sourcePlatform").cloned();
        Ok(posting)
    }

    /// Pending item proposing the same company, title and URL.
    pub fn matches_crawl_target(&self, company_id: i64, title: &str, url: &str) -> bool {
        let field = |key: &str| self.payload.get(key).map(String::as_str);

        self.status.is_pending()
            && field("companyId") == Some(company_id.to_string().as_str())
            && field("title") == Some(title)
            && (field("applyUrl") == Some(url) || field("sourceUrl") == Some(url))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewReviewItem {
    pub source_type: String,
    pub payload: ReviewPayload,
    pub confidence: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(pairs: &[(&str, &str)]) -> ReviewQueueItem {
        ReviewQueueItem {
            id: 4,
            source_type: "crawler.website".to_string(),
            payload: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            confidence: Some(0.62),
            status: ReviewStatus::Pending,
            created_at: "2025-01-01T00:00:00.000Z".to_string(),
            reviewed_at: None,
        }
    }

    #[test]
    fn test_payload_becomes_posting() {
        let review = item(&[
            ("companyId", "12"),
            ("title", "Fourier Intern"),
            ("location", "Shanghai"),
            ("applyUrl", "https://fourier.com/join"),
            ("sourcePlatform", "career_page"),
        ]);
        let posting = review.to_job_posting().unwrap();

        assert_eq!(posting.company_id, 12);
        assert_eq!(posting.title, "Fourier Intern");
        assert_eq!(posting.location.as_deref(), Some("Shanghai"));
        assert_eq!(posting.apply_url.as_deref(), Some("https://fourier.com/join"));
        assert_eq!(posting.source_url, None);
        assert_eq!(posting.status, "open");
        assert_eq!(posting.source_platform.as_deref(), Some("career_page"));
    }

    #[test]
    fn test_payload_requires_company_and_title() {
        let err = item(&[("companyId", "abc"), ("title", "x")])
            .to_job_posting()
            .unwrap_err();
        assert_eq!(err, "review 4 missing valid companyId");

        let err = item(&[("companyId", "1"), ("title", "  ")])
            .to_job_posting()
            .unwrap_err();
        assert_eq!(err, "review 4 missing title");
    }

    #[test]
    fn test_crawl_match_requires_pending() {
        let mut review = item(&[
            ("companyId", "1"),
            ("title", "Unitree Intern"),
            ("sourceUrl", "https://unitree.com/careers"),
        ]);
        assert!(review.matches_crawl_target(1, "Unitree Intern", "https://unitree.com/careers"));
        assert!(!review.matches_crawl_target(1, "Unitree Intern", "https://other.example"));

        review.status = ReviewStatus::Rejected;
        assert!(!review.matches_crawl_target(1, "Unitree Intern", "https://unitree.com/careers"));
    }
}
