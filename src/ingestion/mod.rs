//! Pulls fixtures and broadcast rights from external sources into the store.

pub mod fetcher;
pub mod id_mapping;
pub mod ingestor;
pub mod sources;
pub mod store;

use crate::repository::database::RepositoryError;
use thiserror::Error;

/// Job-level failures. These end the job as `failed`.
#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("data source {0} has no base URL configured")]
    MissingBaseUrl(String),
    #[error("data source {0} is not stored in data_sources")]
    UnregisteredSource(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
