use async_trait::async_trait;

#[derive(Debug)]
pub enum PageFetchError {
    InvalidUrl(String),
    RequestFailed(String),
    BodyUnreadable(String),
}

impl std::fmt::Display for PageFetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageFetchError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            PageFetchError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            PageFetchError::BodyUnreadable(msg) => write!(f, "Failed to read response: {}", msg),
        }
    }
}

impl std::error::Error for PageFetchError {}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage {
    pub status_code: u16,
    /// URL after redirects.
    pub final_url: String,
    pub body: String,
}

impl FetchedPage {
    pub fn is_error_status(&self) -> bool {
        self.status_code >= 400
    }
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Single GET, no retries.
    async fn fetch(&self, url: &str) -> Result<FetchedPage, PageFetchError>;
}
