use crate::cleaning::clean;
use crate::collectors::{Collector, PageFetcher};
use crate::error::AppError;
use crate::storage::write_csv;

const PREVIEW_ROWS: usize = 5;

/// Collect, clean and persist. Returns the number of rows written;
/// nothing is written (and 0 is returned) when no listings were found.
pub async fn run_collect<F: PageFetcher>(collector: &Collector<F>) -> Result<usize, AppError> {
    let report = collector.collect().await;
    if report.pages_failed > 0 {
        tracing::warn!(
            "{} of {} pages could not be fetched",
            report.pages_failed,
            collector.config().urls.len()
        );
    }

    let raw = report.dataset;
    if raw.is_empty() {
        tracing::warn!("Nothing saved: no listings were collected");
        return Ok(0);
    }

    println!("Data before cleaning:\n{}", raw.head(PREVIEW_ROWS));
    let cleaned = clean(raw);
    println!("Data after cleaning:\n{}", cleaned.head(PREVIEW_ROWS));

    let output = &collector.config().output;
    write_csv(output, &cleaned)?;
    tracing::info!("Saved {} listings to '{}'", cleaned.len(), output.display());

    Ok(cleaned.len())
}
