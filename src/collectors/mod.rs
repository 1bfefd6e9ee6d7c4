// Collectors: fetch listing pages and turn them into job listings.

pub mod http;
pub mod remoteok;
pub mod runner;

use async_trait::async_trait;

use crate::error::AppError;

pub use http::HttpFetcher;
pub use remoteok::{ParsedPage, parse_listings};
pub use runner::{CollectReport, Collector};

/// Source of raw listing-page HTML.
/// `HttpFetcher` is the production implementation; tests plug in canned pages.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch one page. Any transport failure or non-success status is an error.
    async fn fetch(&self, url: &str) -> Result<String, AppError>;
}
