use crate::controller::{catalog, competition, fixture, ingestion, rights, team, territory, user};
use crate::model::response::ErrorResponse;
use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{web, Error, HttpRequest, HttpResponse};
use std::fmt;

fn unprocessable<E>(detail: String, err: E) -> Error
where
    E: fmt::Debug + fmt::Display + 'static,
{
    let response = HttpResponse::UnprocessableEntity().json(ErrorResponse { detail });
    InternalError::from_response(err, response).into()
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let detail = format!("Invalid request body: {err}");
    unprocessable(detail, err)
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    let detail = format!("Invalid query parameters: {err}");
    unprocessable(detail, err)
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> Error {
    let detail = format!("Invalid path parameters: {err}");
    unprocessable(detail, err)
}

/// Mounts every resource under `api_prefix`.
pub fn config(conf: &mut web::ServiceConfig, api_prefix: &str) {
    let scope = web::scope(api_prefix)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .configure(team::config)
        .configure(competition::config)
        .configure(fixture::config)
        .configure(user::config)
        .configure(territory::config)
        .configure(rights::config)
        .configure(catalog::config)
        .configure(ingestion::config);

    conf.service(scope);
}
