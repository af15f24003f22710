use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::ports::PageFetcher;
use crate::application::services::page_classifier::{extract_title, infer_job_title};
use crate::domain::entities::{Company, NewReviewItem};
use crate::domain::entities::job_posting::DEFAULT_JOB_STATUS;
use crate::domain::repositories::{CompanyRepository, RepositoryError, ReviewQueueRepository};

pub const CRAWLER_SOURCE_TYPE: &str = "crawler.website";
pub const CONFIDENCE_WITH_TITLE: f64 = 0.62;
pub const CONFIDENCE_WITHOUT_TITLE: f64 = 0.45;

/// `failed_fetches` counts pages that errored or answered with status >= 400.
/// Those companies still get a lead, so it overlaps the other two counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CrawlRunResult {
    pub scanned_companies: usize,
    pub queued_items: usize,
    pub skipped_duplicates: usize,
    pub failed_fetches: usize,
}

struct CompanyCrawl {
    queued: bool,
    fetch_failed: bool,
}

/// Visits every crawlable careers page once and queues a review per new lead.
pub struct RunCrawlerUseCase {
    company_repository: Arc<dyn CompanyRepository>,
    review_repository: Arc<dyn ReviewQueueRepository>,
    page_fetcher: Arc<dyn PageFetcher>,
}

impl RunCrawlerUseCase {
    pub fn new(
        company_repository: Arc<dyn CompanyRepository>,
        review_repository: Arc<dyn ReviewQueueRepository>,
        page_fetcher: Arc<dyn PageFetcher>,
    ) -> Self {
        Self {
            company_repository,
            review_repository,
            page_fetcher,
        }
    }

    pub async fn execute(&self) -> Result<CrawlRunResult, RepositoryError> {
        let companies = self.company_repository.find_all().await?;
        let targets: Vec<(&Company, &str)> = companies
            .iter()
            .filter_map(|company| company.crawl_target().map(|url| (company, url)))
            .collect();

        let mut result = CrawlRunResult {
            scanned_companies: targets.len(),
            ..Default::default()
        };

        for (company, careers_url) in targets {
            let crawl = self.crawl_company(company, careers_url).await?;
            if crawl.queued {
                result.queued_items += 1;
            } else {
                result.skipped_duplicates += 1;
            }
            if crawl.fetch_failed {
                result.failed_fetches += 1;
            }
        }

        tracing::info!(
            "Crawler run finished: scanned={} queued={} duplicates={} failed={}",
            result.scanned_companies,
            result.queued_items,
            result.skipped_duplicates,
            result.failed_fetches
        );
        Ok(result)
    }

    /// Leads are keyed on the careers URL; where the request ended up is
    /// kept under `finalUrl` only when it differs.
    async fn crawl_company(
        &self,
        company: &Company,
        careers_url: &str,
    ) -> Result<CompanyCrawl, RepositoryError> {
        let (page_title, final_url, fetch_failed) = match self.page_fetcher.fetch(careers_url).await {
            Ok(page) => {
                if page.is_error_status() {
                    tracing::warn!(
                        "{} answered with status {} for {}",
                        careers_url,
                        page.status_code,
                        company.name
                    );
                }
                (extract_title(&page.body), Some(page.final_url.clone()), page.is_error_status())
            }
            Err(e) => {
                tracing::warn!("Fetching {} for {} failed: {}", careers_url, company.name, e);
                (None, None, true)
            }
        };

        let title = infer_job_title(&company.name, page_title.as_deref());
        let confidence = if page_title.is_some() {
            CONFIDENCE_WITH_TITLE
        } else {
            CONFIDENCE_WITHOUT_TITLE
        };

        let mut payload = BTreeMap::from([
            ("companyId".to_string(), company.id.to_string()),
            ("companyName".to_string(), company.name.clone()),
            ("title".to_string(), title.clone()),
            ("location".to_string(), "Unknown".to_string()),
            ("sourceUrl".to_string(), careers_url.to_string()),
            ("applyUrl".to_string(), careers_url.to_string()),
            ("status".to_string(), DEFAULT_JOB_STATUS.to_string()),
        ]);
        if let Some(final_url) = final_url.filter(|url| url != careers_url) {
            payload.insert("finalUrl".to_string(), final_url);
        }

        let queued = self
            .review_repository
            .create_unless_duplicate(
                company.id,
                &title,
                careers_url,
                NewReviewItem {
                    source_type: CRAWLER_SOURCE_TYPE.to_string(),
                    payload,
                    confidence: Some(confidence),
                },
            )
            .await?;

        if queued.is_none() {
            tracing::debug!("Already tracking {} at {}", title, careers_url);
        }
        Ok(CompanyCrawl {
            queued: queued.is_some(),
            fetch_failed,
        })
    }
}
