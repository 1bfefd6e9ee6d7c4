use std::path::Path;

use crate::error::AppError;
use crate::models::listing::StoredListing;
use crate::models::{Column, Dataset, JobListing};

/// Write `dataset` as UTF-8 CSV with a header row, replacing any existing file.
pub fn write_csv(path: &Path, dataset: &Dataset) -> Result<(), AppError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(Column::ALL.map(Column::header))?;
    for row in dataset.iter() {
        writer.serialize(row)?;
    }
    writer.flush()?;

    tracing::debug!("Wrote {} rows to {}", dataset.len(), path.display());
    Ok(())
}

/// Read a CSV written by [`write_csv`]. Columns are matched by header name;
/// every cell comes back as text.
pub fn read_csv(path: &Path) -> Result<Dataset, AppError> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    for column in Column::ALL {
        if !headers.iter().any(|h| h == column.header()) {
            return Err(AppError::MissingColumn(column.header().to_string()));
        }
    }

    let rows = reader
        .deserialize::<StoredListing>()
        .map(|row| row.map(JobListing::from))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(Dataset::new(rows))
}
