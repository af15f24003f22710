use regex::Regex;
use std::sync::LazyLock;

static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid title regex"));
static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// What a careers page title suggests about the openings behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Internship,
    Careers,
    NeedsReview,
}

impl PageKind {
    pub fn classify(page_title: Option<&str>) -> Self {
        let title = page_title.unwrap_or_default().to_lowercase();
        if title.contains("intern") {
            PageKind::Internship
        } else if ["career", "job", "join"].iter().any(|kw| title.contains(kw)) {
            PageKind::Careers
        } else {
            PageKind::NeedsReview
        }
    }

    pub fn job_title(&self, company_name: &str) -> String {
        match self {
            PageKind::Internship => format!("{} Intern", company_name),
            PageKind::Careers => format!("{} Robotics Engineer", company_name),
            PageKind::NeedsReview => format!("{} Candidate Role (review needed)", company_name),
        }
    }
}

/// Contents of the first `<title>` element, whitespace collapsed.
pub fn extract_title(html: &str) -> Option<String> {
    let captured = TITLE_REGEX.captures(html)?.get(1)?.as_str();
    let collapsed = WHITESPACE_REGEX.replace_all(captured, " ");
    let trimmed = collapsed.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn infer_job_title(company_name: &str, page_title: Option<&str>) -> String {
    PageKind::classify(page_title).job_title(company_name)
}
