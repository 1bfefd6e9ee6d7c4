#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Invalid request header '{0}'")]
    InvalidHeader(String),

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing column '{0}' in CSV header")]
    MissingColumn(String),
}
