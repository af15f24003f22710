use super::require_text;

pub const DEFAULT_JOB_STATUS: &str = "open";

#[derive(Debug, Clone, PartialEq)]
pub struct JobPosting {
    pub id: i64,
    pub company_id: i64,
    pub title: String,
    pub location: Option<String>,
    pub source_url: Option<String>,
    pub apply_url: Option<String>,
    pub deadline_at: Option<String>,
    pub status: String,
    pub source_platform: Option<String>,
    pub first_seen_at: String,
    pub last_seen_at: String,
}

impl JobPosting {
    pub fn is_open(&self) -> bool {
        self.status.eq_ignore_ascii_case(DEFAULT_JOB_STATUS)
    }

    /// Open posting for the same company and title reachable at `url`.
    pub fn matches_crawl_target(&self, company_id: i64, title: &str, url: &str) -> bool {
        self.company_id == company_id
            && self.title == title
            && self.is_open()
            && (self.apply_url.as_deref() == Some(url) || self.source_url.as_deref() == Some(url))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewJobPosting {
    pub company_id: i64,
    pub title: String,
    pub location: Option<String>,
    pub source_url: Option<String>,
    pub apply_url: Option<String>,
    pub deadline_at: Option<String>,
    pub status: String,
    pub source_platform: Option<String>,
}

impl NewJobPosting {
    pub fn new(company_id: i64, title: &str) -> Result<Self, String> {
        Ok(Self {
            company_id,
            title: require_text("title", title)?,
            location: None,
            source_url: None,
            apply_url: None,
            deadline_at: None,
            status: DEFAULT_JOB_STATUS.to_string(),
            source_platform: None,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobPostingChanges {
    pub title: Option<String>,
    pub location: Option<String>,
    pub source_url: Option<String>,
    pub apply_url: Option<String>,
    pub deadline_at: Option<String>,
    pub status: Option<String>,
    pub source_platform: Option<String>,
}

impl JobPostingChanges {
    pub fn normalized(self) -> Result<Self, String> {
        let title = match self.title {
            Some(title) => Some(require_text("title", &title)?),
            None => None,
        };
        Ok(Self { title, ..self })
    }

    pub fn apply_to(&self, current: &JobPosting, now: &str) -> JobPosting {
        fn pick(change: &Option<String>, current: &Option<String>) -> Option<String> {
            change.clone().or_else(|| current.clone())
        }

        JobPosting {
            id: current.id,
            company_id: current.company_id,
            title: self.title.clone().unwrap_or_else(|| current.title.clone()),
            location: pick(&self.location, &current.location),
            source_url: pick(&self.source_url, &current.source_url),
            apply_url: pick(&self.apply_url, &current.apply_url),
            deadline_at: pick(&self.deadline_at, &current.deadline_at),
            status: self.status.clone().unwrap_or_else(|| current.status.clone()),
            source_platform: pick(&self.source_platform, &current.source_platform),
            first_seen_at: current.first_seen_at.clone(),
            last_seen_at: now.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting() -> JobPosting {
        JobPosting {
            id: 7,
            company_id: 1,
            title: "Unitree Intern".to_string(),
            location: Some("Hangzhou".to_string()),
            source_url: Some("https://unitree.com/careers".to_string()),
            apply_url: None,
            deadline_at: None,
            status: "Open".to_string(),
            source_platform: None,
            first_seen_at: "2025-01-01T00:00:00.000Z".to_string(),
            last_seen_at: "2025-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_crawl_match_uses_either_url() {
        let job = posting();
        assert!(job.matches_crawl_target(1, "Unitree Intern", "https://unitree.com/careers"));
        assert!(!job.matches_crawl_target(2, "Unitree Intern", "https://unitree.com/careers"));
        assert!(!job.matches_crawl_target(1, "Unitree Intern", "https://unitree.com/jobs"));
    }

    #[test]
    fn test_closed_posting_is_not_a_crawl_match() {
        let mut job = posting();
        job.status = "closed".to_string();
        assert!(!job.matches_crawl_target(1, "Unitree Intern", "https://unitree.com/careers"));
    }

    #[test]
    fn test_changes_bump_last_seen_only() {
        let changes = JobPostingChanges {
            title: Some("  Unitree Robotics Engineer ".to_string()),
            ..Default::default()
        }
        .normalized()
        .unwrap();
        let updated = changes.apply_to(&posting(), "2025-02-01T00:00:00.000Z");

        assert_eq!(updated.title, "Unitree Robotics Engineer");
        assert_eq!(updated.location.as_deref(), Some("Hangzhou"));
        assert_eq!(updated.first_seen_at, "2025-01-01T00:00:00.000Z");
        assert_eq!(updated.last_seen_at, "2025-02-01T00:00:00.000Z");
    }

    #[test]
    fn test_blank_title_rejected() {
        assert!(NewJobPosting::new(1, " ").is_err());
        let changes = JobPostingChanges {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(changes.normalized().is_err());
    }
}
