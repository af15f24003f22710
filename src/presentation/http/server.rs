use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::infrastructure::config::StoreBackend;
use crate::presentation::http::{
    handlers::{
        ApplicationHandler, CompanyHandler, CrawlerHandler, InterviewRoundHandler,
        JobPostingHandler, OverviewHandler, ReviewQueueHandler,
    },
    routes::{
        application_routes, company_routes, crawler_routes, health_routes, interview_round_routes,
        job_posting_routes, overview_routes, review_queue_routes,
    },
};

pub const API_PREFIX: &str = "/api/v1";
const BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Clone)]
pub struct HttpServer {
    company_handler: Arc<CompanyHandler>,
    job_posting_handler: Arc<JobPostingHandler>,
    application_handler: Arc<ApplicationHandler>,
    interview_round_handler: Arc<InterviewRoundHandler>,
    review_queue_handler: Arc<ReviewQueueHandler>,
    crawler_handler: Arc<CrawlerHandler>,
    overview_handler: Arc<OverviewHandler>,
    store: StoreBackend,
    port: u16,
}

impl HttpServer {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        company_handler: Arc<CompanyHandler>,
        job_posting_handler: Arc<JobPostingHandler>,
        application_handler: Arc<ApplicationHandler>,
        interview_round_handler: Arc<InterviewRoundHandler>,
        review_queue_handler: Arc<ReviewQueueHandler>,
        crawler_handler: Arc<CrawlerHandler>,
        overview_handler: Arc<OverviewHandler>,
        store: StoreBackend,
        port: u16,
    ) -> Self {
        Self {
            company_handler,
            job_posting_handler,
            application_handler,
            interview_round_handler,
            review_queue_handler,
            crawler_handler,
            overview_handler,
            store,
            port,
        }
    }

    /// Full application router with middleware, without binding a socket.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let api = Router::new()
            .merge(overview_routes(self.overview_handler.clone()))
            .merge(company_routes(self.company_handler.clone()))
            .merge(job_posting_routes(self.job_posting_handler.clone()))
            .merge(application_routes(self.application_handler.clone()))
            .merge(interview_round_routes(self.interview_round_handler.clone()))
            .merge(review_queue_routes(self.review_queue_handler.clone()))
            .merge(crawler_routes(self.crawler_handler.clone()));

        Router::new()
            .merge(health_routes(self.store))
            .nest(API_PREFIX, api)
            .layer(cors)
            .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
            .layer(
                TraceLayer::new_for_http()
                    .on_request(
                        |request: &axum::http::Request<axum::body::Body>, _span: &tracing::Span| {
                            tracing::info!(
                                "Received request: {} {}",
                                request.method(),
                                request.uri()
                            );
                        },
                    )
                    .on_response(
                        |response: &axum::http::Response<axum::body::Body>,
                         latency: std::time::Duration,
                         _span: &tracing::Span| {
                            tracing::info!(
                                "Response: {} (took {} ms)",
                                response.status(),
                                latency.as_millis()
                            );
                        },
                    )
                    .on_failure(
                        |error: ServerErrorsFailureClass,
                         latency: std::time::Duration,
                         _span: &tracing::Span| {
                            tracing::error!(
                                "Request failed: {:?} (took {} ms)",
                                error,
                                latency.as_millis()
                            );
                        },
                    ),
            )
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("fmro-backend listening on {} ({} store)", addr, self.store.as_str());
        axum::serve(listener, app).await?;

        Ok(())
    }
}
