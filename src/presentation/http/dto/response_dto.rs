use serde::{Deserialize, Serialize};

use crate::application::use_cases::CrawlRunResult;
use crate::domain::entities::Overview;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewDto {
    pub upcoming_deadlines: usize,
    pub interviews_this_week: usize,
    pub pending_reviews: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlRunResultDto {
    pub scanned_companies: usize,
    pub queued_items: usize,
    pub skipped_duplicates: usize,
    pub failed_fetches: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponseDto {
    pub ok: bool,
    pub service: String,
    pub store: String,
}

impl From<Overview> for OverviewDto {
    fn from(overview: Overview) -> Self {
        Self {
            upcoming_deadlines: overview.upcoming_deadlines,
            interviews_this_week: overview.interviews_this_week,
            pending_reviews: overview.pending_reviews,
        }
    }
}

impl From<CrawlRunResult> for CrawlRunResultDto {
    fn from(result: CrawlRunResult) -> Self {
        Self {
            scanned_companies: result.scanned_companies,
            queued_items: result.queued_items,
            skipped_duplicates: result.skipped_duplicates,
            failed_fetches: result.failed_fetches,
        }
    }
}
