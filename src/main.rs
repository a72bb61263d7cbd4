use crate::config::config::Config;
use crate::config::logging::init_logging;
use crate::ingestion::fetcher::HttpFetcher;
use crate::model::response::{ErrorResponse, HealthResponse, RootResponse};
use crate::repository::database::Database;
use crate::util::real_ip_key_extractor::RealIpKeyExtractor;
use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder, Result};
use log::info;

mod config;
mod controller;
mod ingestion;
mod model;
mod repository;
mod rights;
mod service;
mod util;

#[get("/")]
async fn root(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(RootResponse {
        service: data.config.app_name.clone(),
        version: data.config.app_version.clone(),
        status: "running".to_string(),
    })
}

fn health_response(data: &AppState) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        service: data.config.app_name.clone(),
    })
}

#[get("/health")]
async fn health_check(data: web::Data<AppState>) -> impl Responder {
    health_response(&data)
}

#[get("/healthz")]
async fn liveness_check(data: web::Data<AppState>) -> impl Responder {
    health_response(&data)
}

async fn not_found() -> Result<HttpResponse> {
    let response = ErrorResponse {
        detail: "Not Found".to_string(),
    };
    Ok(HttpResponse::NotFound().json(response))
}

/// No configured origins means any origin, outside production.
fn cors(config: &Config) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600);

    if config.cors_origins.is_empty() && !config.is_production() {
        cors = cors.allow_any_origin();
    }
    for origin in &config.cors_origins {
        cors = cors.allowed_origin(origin);
    }
    cors
}

pub struct AppState {
    db: Database,
    fetcher: HttpFetcher,
    config: Config,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::init();
    init_logging(&config.log_config);
    info!(
        "Starting {} {} ({:?})",
        config.app_name, config.app_version, config.environment
    );

    let db = Database::new(&config);
    let fetcher = HttpFetcher::new(config.ingestion_api_token.clone())
        .expect("Failed to build the ingestion HTTP client.");
    let bind_address = (config.server_host.clone(), config.server_port);
    let api_prefix = config.api_prefix.clone();

    let governor_conf = GovernorConfigBuilder::default()
        .per_second(config.rate_limit_per_second)
        .burst_size(config.rate_limit_burst)
        .key_extractor(RealIpKeyExtractor)
        .finish()
        .expect("Invalid rate limit configuration.");

    let app_data = web::Data::new(AppState {
        db,
        fetcher,
        config,
    });

    HttpServer::new(move || {
        App::new()
            .app_data(app_data.clone())
            .configure(|conf| controller::handler::config(conf, &api_prefix))
            .service(root)
            .service(health_check)
            .service(liveness_check)
            .default_service(web::route().to(not_found))
            .wrap(actix_web::middleware::Logger::default())
            .wrap(Governor::new(&governor_conf))
            .wrap(cors(&app_data.config))
    })
    .bind(bind_address)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;

    fn state() -> web::Data<AppState> {
        let config = Config::from_lookup(|key| match key {
            "DATABASE_URL" => Some("postgres://localhost/rugby_atlas_test".to_string()),
            _ => None,
        });
        let db = Database::new(&config);
        let fetcher = HttpFetcher::new(None).expect("client");
        web::Data::new(AppState {
            db,
            fetcher,
            config,
        })
    }

    #[actix_web::test]
    async fn health_endpoints_report_service_name() {
        let app = test::init_service(
            App::new()
                .app_data(state())
                .service(health_check)
                .service(liveness_check),
        )
        .await;

        for uri in ["/health", "/healthz"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let body: HealthResponse = test::call_and_read_body_json(&app, req).await;
            assert_eq!(
                body,
                HealthResponse {
                    status: "ok".to_string(),
                    service: "Rugby Atlas API".to_string(),
                }
            );
        }
    }

    #[actix_web::test]
    async fn root_reports_version() {
        let app = test::init_service(App::new().app_data(state()).service(root)).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let body: RootResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.status, "running");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn unknown_routes_return_detail() {
        let app = test::init_service(
            App::new()
                .app_data(state())
                .configure(|conf| controller::handler::config(conf, "/api/v1"))
                .default_service(web::route().to(not_found)),
        )
        .await;
        let req = test::TestRequest::get().uri("/nowhere").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.detail, "Not Found");
    }

    #[actix_web::test]
    async fn malformed_bodies_are_unprocessable() {
        let app = test::init_service(
            App::new()
                .app_data(state())
                .configure(|conf| controller::handler::config(conf, "/api/v1")),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/v1/teams")
            .insert_header(header::ContentType::json())
            .set_payload("{\"name\": 42")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn unknown_job_type_is_unprocessable() {
        let app = test::init_service(
            App::new()
                .app_data(state())
                .configure(|conf| controller::handler::config(conf, "/api/v1")),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/v1/ingestion/WORLD_RUGBY/standings")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
