use crate::ingestion::sources::SourceConfig;
use crate::ingestion::IngestionError;
use crate::model::ingestion::{JobType, SourceType};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Pulls raw, undecoded records from an external source.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    async fn fetch_fixtures(&self, source: &SourceConfig) -> Result<Vec<Value>, IngestionError>;

    async fn fetch_rights(&self, source: &SourceConfig) -> Result<Vec<Value>, IngestionError>;
}

pub struct HttpFetcher {
    client: Client,
    api_token: Option<String>,
}

impl HttpFetcher {
    pub fn new(api_token: Option<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(HttpFetcher { client, api_token })
    }

    async fn fetch(
        &self,
        source: &SourceConfig,
        job_type: JobType,
    ) -> Result<Vec<Value>, IngestionError> {
        if source.source_type != SourceType::Api {
            info!(
                "No fetcher integrated for {} sources, {} yields no {}",
                source.source_type, source.code, job_type
            );
            return Ok(Vec::new());
        }
        let base_url = source
            .base_url
            .as_deref()
            .ok_or_else(|| IngestionError::MissingBaseUrl(source.code.clone()))?;
        let url = format!("{}/{}", base_url.trim_end_matches('/'), job_type.as_str());
        info!("Fetching {} from {}", job_type, url);

        let mut request = self.client.get(&url);
        if source.auth_required {
            match &self.api_token {
                Some(token) => request = request.bearer_auth(token),
                None => debug!("{} requires auth but no API token is configured", source.code),
            }
        }

        let records = request
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| IngestionError::Http {
                url: url.clone(),
                source,
            })?
            .json::<Vec<Value>>()
            .await
            .map_err(|source| IngestionError::Http { url, source })?;
        Ok(records)
    }
}

#[async_trait]
impl SourceFetcher for HttpFetcher {
    async fn fetch_fixtures(&self, source: &SourceConfig) -> Result<Vec<Value>, IngestionError> {
        self.fetch(source, JobType::Fixtures).await
    }

    async fn fetch_rights(&self, source: &SourceConfig) -> Result<Vec<Value>, IngestionError> {
        self.fetch(source, JobType::Rights).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(source_type: SourceType, base_url: Option<&str>) -> SourceConfig {
        SourceConfig {
            id: Some(1),
            name: "Test".to_string(),
            code: "TEST".to_string(),
            source_type,
            base_url: base_url.map(str::to_string),
            auth_required: false,
        }
    }

    #[tokio::test]
    async fn non_api_sources_yield_nothing() {
        let fetcher = HttpFetcher::new(None).unwrap();
        let rss = source(SourceType::Rss, Some("https://feeds.example/rugby"));

        assert!(fetcher.fetch_fixtures(&rss).await.unwrap().is_empty());
        assert!(fetcher.fetch_rights(&rss).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn api_source_without_base_url_is_an_error() {
        let fetcher = HttpFetcher::new(None).unwrap();
        let err = fetcher
            .fetch_fixtures(&source(SourceType::Api, None))
            .await
            .unwrap_err();
        assert!(matches!(err, IngestionError::MissingBaseUrl(code) if code == "TEST"));
    }
}
