use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError, redirect};
use std::time::Duration;

use crate::application::ports::page_fetcher::{FetchedPage, PageFetchError, PageFetcher};
use crate::infrastructure::config::{DEFAULT_CRAWLER_TIMEOUT_SECS, DEFAULT_CRAWLER_USER_AGENT};

const MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone)]
pub struct PageFetcherConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for PageFetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_CRAWLER_TIMEOUT_SECS),
            user_agent: DEFAULT_CRAWLER_USER_AGENT.to_string(),
        }
    }
}

/// Single-shot GET over reqwest. No retries.
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new(config: PageFetcherConfig) -> Result<Self, ReqwestError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, PageFetchError> {
        let target = reqwest::Url::parse(url)
            .map_err(|e| PageFetchError::InvalidUrl(format!("{}: {}", url, e)))?;

        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| PageFetchError::RequestFailed(e.to_string()))?;

        let status_code = response.status().as_u16();
        let final_url = response.url().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| PageFetchError::BodyUnreadable(e.to_string()))?;

        tracing::debug!("GET {} -> {} ({} bytes)", final_url, status_code, body.len());

        Ok(FetchedPage {
            status_code,
            final_url,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_malformed_url_is_rejected_before_sending() {
        let fetcher = HttpPageFetcher::new(PageFetcherConfig::default()).unwrap();
        let err = fetcher.fetch("not a url").await.unwrap_err();
        assert!(matches!(err, PageFetchError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_request_failure() {
        let fetcher = HttpPageFetcher::new(PageFetcherConfig {
            timeout: Duration::from_millis(500),
            ..Default::default()
        })
        .unwrap();
        let err = fetcher.fetch("http://127.0.0.1:1/careers").await.unwrap_err();
        assert!(matches!(err, PageFetchError::RequestFailed(_)));
    }
}
