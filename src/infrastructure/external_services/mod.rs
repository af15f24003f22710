pub mod http_page_fetcher;

pub use http_page_fetcher::{HttpPageFetcher, PageFetcherConfig};
