use std::sync::Arc;

use crate::{
    application::{
        ports::PageFetcher,
        use_cases::{
            AdvanceApplicationStageUseCase, ApproveReviewUseCase, GetOverviewUseCase,
            RejectReviewUseCase, RunCrawlerUseCase,
        },
    },
    domain::repositories::{
        ApplicationRepository, CompanyRepository, InterviewRoundRepository, JobPostingRepository,
        ReviewQueueRepository,
    },
    infrastructure::{
        config::{AppConfig, StoreBackend},
        database::{
            create_connection_pool,
            repositories::{
                PostgresApplicationRepository, PostgresCompanyRepository,
                PostgresInterviewRoundRepository, PostgresJobPostingRepository,
                PostgresReviewQueueRepository,
            },
            run_migrations,
        },
        external_services::{HttpPageFetcher, PageFetcherConfig},
        memory::InMemoryStore,
    },
    presentation::http::{
        HttpServer,
        handlers::{
            ApplicationHandler, CompanyHandler, CrawlerHandler, InterviewRoundHandler,
            JobPostingHandler, OverviewHandler, ReviewQueueHandler,
        },
    },
};

/// The five repository ports, backed by one storage engine.
#[derive(Clone)]
pub struct Repositories {
    pub companies: Arc<dyn CompanyRepository>,
    pub jobs: Arc<dyn JobPostingRepository>,
    pub applications: Arc<dyn ApplicationRepository>,
    pub rounds: Arc<dyn InterviewRoundRepository>,
    pub reviews: Arc<dyn ReviewQueueRepository>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self {
            companies: store.clone(),
            jobs: store.clone(),
            applications: store.clone(),
            rounds: store.clone(),
            reviews: store,
        }
    }

    pub fn postgres(database_url: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let db_pool = create_connection_pool(database_url)?;
        run_migrations(&db_pool).map_err(|e| format!("Failed to run database migrations: {}", e))?;

        Ok(Self {
            companies: Arc::new(PostgresCompanyRepository::new(db_pool.clone())),
            jobs: Arc::new(PostgresJobPostingRepository::new(db_pool.clone())),
            applications: Arc::new(PostgresApplicationRepository::new(db_pool.clone())),
            rounds: Arc::new(PostgresInterviewRoundRepository::new(db_pool.clone())),
            reviews: Arc::new(PostgresReviewQueueRepository::new(db_pool)),
        })
    }
}

pub struct AppContainer {
    pub config: AppConfig,

    // Repositories
    pub repositories: Repositories,

    // External Services
    pub page_fetcher: Arc<dyn PageFetcher>,

    // Use Cases
    pub advance_stage_use_case: Arc<AdvanceApplicationStageUseCase>,
    pub approve_review_use_case: Arc<ApproveReviewUseCase>,
    pub reject_review_use_case: Arc<RejectReviewUseCase>,
    pub run_crawler_use_case: Arc<RunCrawlerUseCase>,
    pub get_overview_use_case: Arc<GetOverviewUseCase>,

    // HTTP Handlers
    pub company_handler: Arc<CompanyHandler>,
    pub job_posting_handler: Arc<JobPostingHandler>,
    pub application_handler: Arc<ApplicationHandler>,
    pub interview_round_handler: Arc<InterviewRoundHandler>,
    pub review_queue_handler: Arc<ReviewQueueHandler>,
    pub crawler_handler: Arc<CrawlerHandler>,
    pub overview_handler: Arc<OverviewHandler>,
}

impl AppContainer {
    pub fn new(config: AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let repositories = match (config.store, config.database_url.as_deref()) {
            (StoreBackend::Postgres, Some(url)) => Repositories::postgres(url)?,
            _ => Repositories::in_memory(),
        };

        let page_fetcher: Arc<dyn PageFetcher> = Arc::new(
            HttpPageFetcher::new(PageFetcherConfig {
                timeout: config.crawler_timeout,
                user_agent: config.crawler_user_agent.clone(),
            })
            .map_err(|e| format!("Failed to build crawler HTTP client: {}", e))?,
        );

        Ok(Self::with_parts(config, repositories, page_fetcher))
    }

    /// Wires use cases and handlers around already built adapters.
    pub fn with_parts(
        config: AppConfig,
        repositories: Repositories,
        page_fetcher: Arc<dyn PageFetcher>,
    ) -> Self {
        // Create use cases
        let advance_stage_use_case = Arc::new(AdvanceApplicationStageUseCase::new(
            repositories.applications.clone(),
        ));
        let approve_review_use_case =
            Arc::new(ApproveReviewUseCase::new(repositories.reviews.clone()));
        let reject_review_use_case = Arc::new(RejectReviewUseCase::new(repositories.reviews.clone()));
        let run_crawler_use_case = Arc::new(RunCrawlerUseCase::new(
            repositories.companies.clone(),
            repositories.reviews.clone(),
            page_fetcher.clone(),
        ));
        let get_overview_use_case = Arc::new(GetOverviewUseCase::new(
            repositories.applications.clone(),
            repositories.rounds.clone(),
            repositories.reviews.clone(),
        ));

        // Create HTTP handlers
        let company_handler = Arc::new(CompanyHandler::new(repositories.companies.clone()));
        let job_posting_handler = Arc::new(JobPostingHandler::new(repositories.jobs.clone()));
        let application_handler = Arc::new(ApplicationHandler::new(
            repositories.applications.clone(),
            advance_stage_use_case.clone(),
        ));
        let interview_round_handler =
            Arc::new(InterviewRoundHandler::new(repositories.rounds.clone()));
        let review_queue_handler = Arc::new(ReviewQueueHandler::new(
            repositories.reviews.clone(),
            approve_review_use_case.clone(),
            reject_review_use_case.clone(),
        ));
        let crawler_handler = Arc::new(CrawlerHandler::new(run_crawler_use_case.clone()));
        let overview_handler = Arc::new(OverviewHandler::new(get_overview_use_case.clone()));

        Self {
            config,
            repositories,
            page_fetcher,
            advance_stage_use_case,
            approve_review_use_case,
            reject_review_use_case,
            run_crawler_use_case,
            get_overview_use_case,
            company_handler,
            job_posting_handler,
            application_handler,
            interview_round_handler,
            review_queue_handler,
            crawler_handler,
            overview_handler,
        }
    }

    pub fn http_server(&self) -> HttpServer {
        HttpServer::new(
            self.company_handler.clone(),
            self.job_posting_handler.clone(),
            self.application_handler.clone(),
            self.interview_round_handler.clone(),
            self.review_queue_handler.clone(),
            self.crawler_handler.clone(),
            self.overview_handler.clone(),
            self.config.store,
            self.config.port,
        )
    }
}
