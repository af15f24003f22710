//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use fmro_backend::application::ports::{FetchedPage, PageFetchError, PageFetcher};
use fmro_backend::infrastructure::container::Repositories;
use fmro_backend::infrastructure::{AppConfig, AppContainer};

/// Serves canned pages by URL; anything else fails like a refused connection.
#[derive(Default)]
pub struct CannedFetcher {
    pages: HashMap<String, FetchedPage>,
}

impl CannedFetcher {
    pub fn with_page(mut self, url: &str, status_code: u16, body: &str) -> Self {
        self.pages.insert(
            url.to_string(),
            FetchedPage {
                status_code,
                final_url: url.to_string(),
                body: body.to_string(),
            },
        );
        self
    }
}

#[async_trait]
impl PageFetcher for CannedFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, PageFetchError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| PageFetchError::RequestFailed(format!("no route to {}", url)))
    }
}

pub fn test_router(fetcher: CannedFetcher) -> Router {
    let container =
        AppContainer::with_parts(AppConfig::default(), Repositories::in_memory(), Arc::new(fetcher));
    container.http_server().router()
}

/// Serves the router on an ephemeral port and returns the `/api/v1/` base URL.
pub async fn spawn_server(fetcher: CannedFetcher) -> String {
    let router = test_router(fetcher);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api/v1/", addr)
}
