pub mod page_fetcher;

pub use page_fetcher::{FetchedPage, PageFetchError, PageFetcher};
