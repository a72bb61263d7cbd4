use crate::model::ingestion::JobType;
use crate::service::error::ServiceError;
use crate::service::ingestion::{
    get_ingestion_job_service, list_sources_service, run_ingestion_service, SourceFilter,
};
use crate::AppState;
use actix_web::web::{Data, Path, Query};
use actix_web::{get, post, web, HttpResponse};
use log::info;

#[get("/ingestion/sources")]
async fn list_sources_handler(
    data: Data<AppState>,
    filter: Query<SourceFilter>,
) -> Result<HttpResponse, ServiceError> {
    let sources = list_sources_service(&data.db, filter.into_inner()).await?;
    Ok(HttpResponse::Ok().json(sources))
}

#[get("/ingestion/jobs/{job_id}")]
async fn get_job_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let job = get_ingestion_job_service(&data.db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(job))
}

#[post("/ingestion/{source_code}/{job_type}")]
async fn run_ingestion_handler(
    data: Data<AppState>,
    path: Path<(String, JobType)>,
) -> Result<HttpResponse, ServiceError> {
    let (source_code, job_type) = path.into_inner();
    info!("Ingestion of {} requested for source {}", job_type, source_code);
    let job = run_ingestion_service(&data.db, &data.fetcher, &source_code, job_type).await?;
    Ok(HttpResponse::Ok().json(job))
}

pub fn config(conf: &mut web::ServiceConfig) {
    conf.service(list_sources_handler)
        .service(get_job_handler)
        .service(run_ingestion_handler);
}
