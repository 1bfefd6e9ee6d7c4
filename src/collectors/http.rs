use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::collectors::PageFetcher;
use crate::config::CollectorConfig;
use crate::error::AppError;

/// Plain GET fetcher with a browser-like header set. No retries, no explicit timeout.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build the client from the collector's User-Agent and header set.
    pub fn from_config(config: &CollectorConfig) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| AppError::InvalidHeader(name.clone()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| AppError::InvalidHeader(name.to_string()))?;
            headers.insert(name, value);
        }

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(AppError::Client)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| AppError::Request {
                url: url.to_string(),
                source,
            })?;

        if !resp.status().is_success() {
            return Err(AppError::Status {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }

        resp.text().await.map_err(|source| AppError::Request {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_header(name: &str, value: &str) -> CollectorConfig {
        CollectorConfig {
            headers: vec![(name.to_string(), value.to_string())],
            ..CollectorConfig::default()
        }
    }

    #[test]
    fn default_header_set_builds() {
        assert!(HttpFetcher::from_config(&CollectorConfig::default()).is_ok());
    }

    #[test]
    fn bad_header_name_is_rejected() {
        match HttpFetcher::from_config(&config_with_header("Bad Header", "x")) {
            Err(AppError::InvalidHeader(name)) => assert_eq!(name, "Bad Header"),
            Err(other) => panic!("expected InvalidHeader, got {other:?}"),
            Ok(_) => panic!("expected InvalidHeader, got a fetcher"),
        }
    }

    #[test]
    fn bad_header_value_is_rejected() {
        assert!(matches!(
            HttpFetcher::from_config(&config_with_header("Accept", "line\nbreak")),
            Err(AppError::InvalidHeader(_))
        ));
    }
}
