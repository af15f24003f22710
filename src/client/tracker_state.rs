use std::collections::BTreeMap;

use chrono::{Local, Utc};

use super::api_client::{ClientError, FmroApiClient};
use super::preferences::Preferences;
use crate::domain::value_objects::Stage;
use crate::presentation::http::dto::{
    ApplicationDto, CreateApplicationRequestDto, JobPostingDto, ReviewQueueItemDto,
    UpdateApplicationRequestDto,
};

/// Stage filter value that shows every application.
pub const ALL_STAGES: &str = "All";
/// City filter value that shows every job.
pub const ALL_CITIES: &str = "All";

const NO_DEADLINE: &str = "TBD";

#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationItem {
    pub id: i64,
    pub company: String,
    pub role: String,
    pub stage: String,
    pub deadline: String,
}

impl From<ApplicationDto> for ApplicationItem {
    fn from(dto: ApplicationDto) -> Self {
        Self {
            id: dto.id,
            company: dto.company_name,
            role: dto.role,
            stage: dto.stage,
            deadline: display_date(dto.deadline_at.as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobItem {
    pub id: i64,
    pub company_id: i64,
    pub company: String,
    pub title: String,
    pub location: String,
    pub deadline: String,
    pub status: String,
    pub apply_url: Option<String>,
    pub source_url: Option<String>,
}

impl JobItem {
    fn from_dto(dto: JobPostingDto, company_names: &BTreeMap<i64, String>) -> Self {
        let company = company_names
            .get(&dto.company_id)
            .cloned()
            .unwrap_or_else(|| format!("Company #{}", dto.company_id));
        Self {
            id: dto.id,
            company_id: dto.company_id,
            company,
            title: dto.title,
            location: dto.location.unwrap_or_else(|| "Unknown".to_string()),
            deadline: display_date(dto.deadline_at.as_deref()),
            status: dto.status,
            apply_url: dto.apply_url,
            source_url: dto.source_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewItem {
    pub id: i64,
    pub company: String,
    pub title: String,
    pub location: String,
    pub apply_url: Option<String>,
    pub confidence: Option<f64>,
}

impl From<ReviewQueueItemDto> for ReviewItem {
    fn from(dto: ReviewQueueItemDto) -> Self {
        let field = |key: &str| dto.payload.get(key).filter(|v| !v.trim().is_empty()).cloned();
        Self {
            id: dto.id,
            company: field("companyName").unwrap_or_else(|| "Unknown company".to_string()),
            title: field("title").unwrap_or_else(|| "Untitled role".to_string()),
            location: field("location").unwrap_or_else(|| "Unknown".to_string()),
            apply_url: field("applyUrl").or_else(|| field("sourceUrl")),
            confidence: dto.confidence,
        }
    }
}

fn display_date(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => value.chars().take(10).collect(),
        None => NO_DEADLINE.to_string(),
    }
}

/// Client-side view of the tracker.
///
/// Mutations are applied locally before the backend is called. A failed call
/// leaves the local change in place (deletes are rolled back) and records a
/// message; the next [`TrackerState::refresh`] reconciles with the server.
pub struct TrackerState {
    api: FmroApiClient,
    crawler_import_limit: usize,
    applications: Vec<ApplicationItem>,
    jobs: Vec<JobItem>,
    review_queue: Vec<ReviewItem>,
    selected_stage: String,
    selected_id: Option<i64>,
    job_keyword: String,
    city_filter: String,
    selected_job_id: Option<i64>,
    loading: bool,
    syncing: bool,
    error: Option<String>,
    status: Option<String>,
    last_placeholder_id: i64,
}

impl TrackerState {
    pub fn new(api: FmroApiClient, crawler_import_limit: usize) -> Self {
        Self {
            api,
            crawler_import_limit: crawler_import_limit.max(1),
            applications: Vec::new(),
            jobs: Vec::new(),
            review_queue: Vec::new(),
            selected_stage: ALL_STAGES.to_string(),
            selected_id: None,
            job_keyword: String::new(),
            city_filter: ALL_CITIES.to_string(),
            selected_job_id: None,
            loading: false,
            syncing: false,
            error: None,
            status: None,
            last_placeholder_id: 0,
        }
    }

    pub fn from_preferences(preferences: &Preferences) -> Result<Self, ClientError> {
        let api = FmroApiClient::new(&preferences.backend_base_url)?;
        Ok(Self::new(api, preferences.crawler_import_limit))
    }

    pub fn applications(&self) -> &[ApplicationItem] {
        &self.applications
    }

    pub fn jobs(&self) -> &[JobItem] {
        &self.jobs
    }

    pub fn review_queue(&self) -> &[ReviewItem] {
        &self.review_queue
    }

    pub fn selected_stage(&self) -> &str {
        &self.selected_stage
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected_id
    }

    pub fn job_keyword(&self) -> &str {
        &self.job_keyword
    }

    pub fn city_filter(&self) -> &str {
        &self.city_filter
    }

    pub fn selected_job(&self) -> Option<&JobItem> {
        let id = self.selected_job_id?;
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_syncing(&self) -> bool {
        self.syncing
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn clear_messages(&mut self) {
        self.error = None;
        self.status = None;
    }

    pub fn set_backend_base_url(&mut self, base_url: &str) -> Result<(), ClientError> {
        self.api.set_base_url(base_url)
    }

    pub fn set_crawler_import_limit(&mut self, limit: usize) {
        self.crawler_import_limit = limit.max(1);
    }

    /// Accepts `All` or any stage label; anything else leaves the filter as is.
    pub fn select_stage(&mut self, stage: &str) -> bool {
        if stage.trim().eq_ignore_ascii_case(ALL_STAGES) {
            self.selected_stage = ALL_STAGES.to_string();
            return true;
        }
        match Stage::from_string(stage) {
            Ok(stage) => {
                self.selected_stage = stage.label().to_string();
                true
            }
            Err(_) => false,
        }
    }

    pub fn select_application(&mut self, id: Option<i64>) {
        self.selected_id = id;
    }

    pub fn select_job(&mut self, id: Option<i64>) {
        self.selected_job_id = id;
    }

    pub fn set_job_keyword(&mut self, keyword: &str) {
        self.job_keyword = keyword.to_string();
    }

    /// A blank city resets the filter to `All`.
    pub fn set_city_filter(&mut self, city: &str) {
        let city = city.trim();
        self.city_filter = if city.is_empty() {
            ALL_CITIES.to_string()
        } else {
            city.to_string()
        };
    }

    /// `All` followed by every distinct job location, sorted.
    pub fn cities(&self) -> Vec<&str> {
        let mut cities: Vec<&str> = self.jobs.iter().map(|job| job.location.as_str()).collect();
        cities.sort_unstable();
        cities.dedup();
        cities.insert(0, ALL_CITIES);
        cities
    }

    /// Jobs whose title, company or location contains the keyword
    /// (ignoring case) and whose location matches the city filter.
    pub fn visible_jobs(&self) -> Vec<&JobItem> {
        let keyword = self.job_keyword.trim().to_lowercase();
        let any_city = self.city_filter.eq_ignore_ascii_case(ALL_CITIES);

        self.jobs
            .iter()
            .filter(|job| {
                keyword.is_empty()
                    || [&job.title, &job.company, &job.location]
                        .iter()
                        .any(|field| field.to_lowercase().contains(&keyword))
            })
            .filter(|job| any_city || job.location.eq_ignore_ascii_case(&self.city_filter))
            .collect()
    }

    pub fn visible_applications(&self) -> Vec<&ApplicationItem> {
        self.applications
            .iter()
            .filter(|item| {
                self.selected_stage == ALL_STAGES
                    || item.stage.eq_ignore_ascii_case(&self.selected_stage)
            })
            .collect()
    }

    pub async fn refresh(&mut self) {
        self.loading = true;
        let result = self.fetch_snapshot().await;
        self.loading = false;

        match result {
            Ok((applications, jobs, reviews)) => {
                self.applications = applications;
                self.jobs = jobs;
                self.review_queue = reviews;
                if let Some(id) = self.selected_id {
                    if !self.applications.iter().any(|item| item.id == id) {
                        self.selected_id = None;
                    }
                }
                if !self
                    .selected_job_id
                    .is_some_and(|id| self.jobs.iter().any(|job| job.id == id))
                {
                    self.selected_job_id = self.jobs.first().map(|job| job.id);
                }
                self.error = None;
            }
            Err(e) => {
                tracing::warn!("Refresh failed: {}", e);
                self.error = Some(format!("Backend unreachable: {}", e));
            }
        }
    }

    async fn fetch_snapshot(
        &self,
    ) -> Result<(Vec<ApplicationItem>, Vec<JobItem>, Vec<ReviewItem>), ClientError> {
        let (companies, jobs, applications, reviews) = tokio::try_join!(
            self.api.companies(),
            self.api.jobs(None),
            self.api.applications(None),
            self.api.review_queue(Some("pending")),
        )?;

        let company_names: BTreeMap<i64, String> =
            companies.into_iter().map(|c| (c.id, c.name)).collect();

        Ok((
            applications.into_iter().map(ApplicationItem::from).collect(),
            jobs.into_iter()
                .map(|job| JobItem::from_dto(job, &company_names))
                .collect(),
            reviews.into_iter().map(ReviewItem::from).collect(),
        ))
    }

    fn next_placeholder_id(&mut self) -> i64 {
        let candidate = -Utc::now().timestamp_millis();
        self.last_placeholder_id = candidate.min(self.last_placeholder_id - 1);
        self.last_placeholder_id
    }

    pub async fn add_application(&mut self, company: &str, role: &str) {
        self.create_application(company, role, None).await;
    }

    /// Starts tracking an application for a listed job, linked to it.
    pub async fn add_application_from_job(&mut self, job_id: i64) {
        let Some(job) = self.jobs.iter().find(|job| job.id == job_id) else {
            return;
        };
        let (company, title) = (job.company.clone(), job.title.clone());
        self.create_application(&company, &title, Some(job_id)).await;
    }

    async fn create_application(&mut self, company: &str, role: &str, job_posting_id: Option<i64>) {
        let company = company.trim();
        let role = role.trim();
        if company.is_empty() || role.is_empty() {
            return;
        }

        let placeholder_id = self.next_placeholder_id();
        self.applications.insert(
            0,
            ApplicationItem {
                id: placeholder_id,
                company: company.to_string(),
                role: role.to_string(),
                stage: Stage::Applied.label().to_string(),
                deadline: NO_DEADLINE.to_string(),
            },
        );
        self.selected_id = Some(placeholder_id);

        let request = CreateApplicationRequestDto {
            job_posting_id,
            company_name: company.to_string(),
            role: role.to_string(),
            applied_at: Some(Local::now().format("%Y-%m-%d").to_string()),
            stage: Some(Stage::Applied.label().to_string()),
            ..Default::default()
        };

        match self.api.create_application(&request).await {
            Ok(created) => {
                let created = ApplicationItem::from(created);
                if self.selected_id == Some(placeholder_id) {
                    self.selected_id = Some(created.id);
                }
                match self.applications.iter_mut().find(|i| i.id == placeholder_id) {
                    Some(slot) => *slot = created,
                    None => self.applications.insert(0, created),
                }
            }
            Err(e) => {
                tracing::warn!("Create application failed: {}", e);
                self.error = Some("Saved locally only (API failed)".to_string());
            }
        }
    }

    pub async fn move_to_next_stage(&mut self, id: i64) {
        let next = self
            .applications
            .iter()
            .find(|item| item.id == id)
            .and_then(|item| Stage::from_string(&item.stage).ok())
            .map(|stage| stage.next());

        if let Some(next) = next {
            self.update_stage(id, next).await;
        }
    }

    pub async fn mark_rejected(&mut self, id: i64) {
        self.update_stage(id, Stage::Rejected).await;
    }

    pub async fn mark_offer(&mut self, id: i64) {
        self.update_stage(id, Stage::Offer).await;
    }

    async fn update_stage(&mut self, id: i64, stage: Stage) {
        let Some(item) = self.applications.iter_mut().find(|item| item.id == id) else {
            return;
        };
        item.stage = stage.label().to_string();

        // Placeholders only exist locally.
        if id <= 0 {
            return;
        }

        let request = UpdateApplicationRequestDto {
            stage: Some(stage.label().to_string()),
            ..Default::default()
        };
        match self.api.update_application(id, &request).await {
            Ok(updated) => {
                if let Some(slot) = self.applications.iter_mut().find(|i| i.id == id) {
                    *slot = ApplicationItem::from(updated);
                }
            }
            Err(e) => {
                tracing::warn!("Stage update for application {} failed: {}", id, e);
                self.error = Some("Stage updated locally (API failed)".to_string());
            }
        }
    }

    pub async fn delete_application(&mut self, id: i64) {
        let Some(index) = self.applications.iter().position(|item| item.id == id) else {
            return;
        };
        let removed = self.applications.remove(index);
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }

        if id <= 0 {
            return;
        }

        if let Err(e) = self.api.delete_application(id).await {
            tracing::warn!("Delete of application {} failed: {}", id, e);
            let index = index.min(self.applications.len());
            self.applications.insert(index, removed);
            self.error = Some("Delete failed (API unreachable)".to_string());
        }
    }

    pub async fn approve_review(&mut self, id: i64) {
        self.review_queue.retain(|item| item.id != id);
        self.status = Some("Approving queued job...".to_string());

        let result = self.api.approve_review(id).await;
        self.refresh().await;
        match result {
            Ok(job) => self.status = Some(format!("Imported \"{}\"", job.title)),
            Err(e) => {
                self.status = None;
                self.error = Some(format!("Approve failed: {}", e));
            }
        }
    }

    pub async fn reject_review(&mut self, id: i64) {
        self.review_queue.retain(|item| item.id != id);

        let result = self.api.reject_review(id).await;
        self.refresh().await;
        match result {
            Ok(_) => self.status = Some("Review rejected".to_string()),
            Err(e) => self.error = Some(format!("Reject failed: {}", e)),
        }
    }

    /// Runs the crawler, then approves up to the import limit of pending
    /// reviews so they show up as jobs.
    pub async fn run_crawler(&mut self) {
        self.syncing = true;
        self.status = Some("Crawling careers pages...".to_string());

        let result = self.crawl_and_import().await;
        self.syncing = false;

        match result {
            Ok((scanned, imported)) => {
                self.refresh().await;
                self.status = Some(format!(
                    "Crawled {} companies, imported {} entries",
                    scanned, imported
                ));
            }
            Err(e) => {
                tracing::warn!("Crawler run failed: {}", e);
                self.status = None;
                self.error = Some(format!("Crawl failed: {}", e));
            }
        }
    }

    async fn crawl_and_import(&self) -> Result<(usize, usize), ClientError> {
        let run = self.api.run_crawler().await?;
        let pending = self.api.review_queue(Some("pending")).await?;

        let mut imported = 0;
        for review in pending.into_iter().take(self.crawler_import_limit) {
            match self.api.approve_review(review.id).await {
                Ok(_) => imported += 1,
                Err(e) => tracing::debug!("Skipping review {}: {}", review.id, e),
            }
        }
        Ok((run.scanned_companies, imported))
    }
}
