use crate::ingestion::fetcher::HttpFetcher;
use crate::ingestion::ingestor::Ingestor;
use crate::ingestion::sources::{SourceConfig, SourcesRegistry};
use crate::model::ingestion::{IngestionJob, JobType, SourceType};
use crate::repository::database::Database;
use crate::service::error::ServiceError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SourceFilter {
    #[serde(rename = "type")]
    pub source_type: Option<SourceType>,
}

/// Built-in sources overlaid with the rows stored in `data_sources`.
async fn load_registry(db: &Database) -> Result<SourcesRegistry, ServiceError> {
    let mut registry = SourcesRegistry::default();
    for source in db.list_data_sources().await? {
        if source.is_active {
            registry.register(SourceConfig::from(&source));
        } else {
            registry.remove(&source.code);
        }
    }
    Ok(registry)
}

pub async fn list_sources_service(
    db: &Database,
    filter: SourceFilter,
) -> Result<Vec<SourceConfig>, ServiceError> {
    let registry = load_registry(db).await?;
    let sources = match filter.source_type {
        Some(source_type) => registry.by_type(source_type),
        None => registry.all(),
    };
    Ok(sources.into_iter().cloned().collect())
}

pub async fn run_ingestion_service(
    db: &Database,
    fetcher: &HttpFetcher,
    source_code: &str,
    job_type: JobType,
) -> Result<IngestionJob, ServiceError> {
    let registry = load_registry(db).await?;
    let source = registry
        .get(source_code)
        .ok_or_else(|| ServiceError::NotFound(format!("Data source {source_code} not found")))?;
    let source = match source.id {
        Some(_) => source.clone(),
        None => SourceConfig::from(&db.ensure_data_source(&source.to_new_row()).await?),
    };

    let job = Ingestor::new(db, fetcher).run(&source, job_type).await?;
    Ok(job)
}

pub async fn get_ingestion_job_service(
    db: &Database,
    job_id: i32,
) -> Result<IngestionJob, ServiceError> {
    db.find_ingestion_job(job_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Ingestion job"))
}
