use crate::collectors::{PageFetcher, parse_listings};
use crate::config::CollectorConfig;
use crate::models::Dataset;

/// Outcome of one pass over the configured listing pages.
#[derive(Debug, Default)]
pub struct CollectReport {
    pub dataset: Dataset,
    /// Pages whose fetch failed and contributed nothing.
    pub pages_failed: usize,
    /// Job rows dropped for lacking a title, company or link.
    pub skipped: usize,
}

pub struct Collector<F> {
    config: CollectorConfig,
    fetcher: F,
}

impl<F: PageFetcher> Collector<F> {
    pub fn new(config: CollectorConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Fetch every configured page in order, pausing after each one.
    /// A failed page is logged and counted as empty; the run always continues.
    pub async fn collect(&self) -> CollectReport {
        tracing::info!("Starting collection over {} pages", self.config.urls.len());

        let mut rows = Vec::new();
        let mut report = CollectReport::default();

        for url in &self.config.urls {
            let found = match self.fetcher.fetch(url).await {
                Ok(html) => {
                    let page = parse_listings(&html, &self.config.base_url);
                    if page.skipped > 0 {
                        tracing::debug!("Skipped {} incomplete job rows on {url}", page.skipped);
                    }
                    report.skipped += page.skipped;
                    page.listings
                }
                Err(e) => {
                    tracing::error!("Failed to fetch {url}: {e}");
                    report.pages_failed += 1;
                    Vec::new()
                }
            };

            tracing::info!("Collected {} listings from {url}", found.len());
            rows.extend(found);

            tokio::time::sleep(self.config.delay).await;
        }

        if rows.is_empty() {
            tracing::warn!("No listings found");
        } else {
            tracing::info!("Total listings collected: {}", rows.len());
        }

        report.dataset = Dataset::new(rows);
        report
    }
}
