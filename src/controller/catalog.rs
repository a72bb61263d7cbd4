use crate::model::provider::{NewPlatform, NewProvider};
use crate::model::response::ListParams;
use crate::model::season::NewSeason;
use crate::model::sport::{NewGoverningBody, NewSport};
use crate::model::venue::NewVenue;
use crate::service::catalog::*;
use crate::service::error::ServiceError;
use crate::AppState;
use actix_web::web::{Data, Json, Path, Query};
use actix_web::{get, post, web, HttpResponse};

#[get("/sports")]
async fn list_sports_handler(
    data: Data<AppState>,
    params: Query<ListParams>,
) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(list_sports_service(&data.db, params.into_inner()).await?))
}

#[post("/sports")]
async fn create_sport_handler(
    data: Data<AppState>,
    body: Json<NewSport>,
) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Created().json(create_sport_service(&data.db, body.into_inner()).await?))
}

#[get("/sports/{sport_id}")]
async fn get_sport_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(get_sport_service(&data.db, path.into_inner()).await?))
}

#[get("/governing-bodies")]
async fn list_governing_bodies_handler(
    data: Data<AppState>,
    params: Query<ListParams>,
) -> Result<HttpResponse, ServiceError> {
    let bodies = list_governing_bodies_service(&data.db, params.into_inner()).await?;
    Ok(HttpResponse::Ok().json(bodies))
}

#[post("/governing-bodies")]
async fn create_governing_body_handler(
    data: Data<AppState>,
    body: Json<NewGoverningBody>,
) -> Result<HttpResponse, ServiceError> {
    let created = create_governing_body_service(&data.db, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

#[get("/governing-bodies/{body_id}")]
async fn get_governing_body_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let body = get_governing_body_service(&data.db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(body))
}

#[get("/seasons")]
async fn list_seasons_handler(
    data: Data<AppState>,
    filter: Query<SeasonFilter>,
    params: Query<ListParams>,
) -> Result<HttpResponse, ServiceError> {
    let seasons =
        list_seasons_service(&data.db, filter.into_inner(), params.into_inner()).await?;
    Ok(HttpResponse::Ok().json(seasons))
}

#[post("/seasons")]
async fn create_season_handler(
    data: Data<AppState>,
    body: Json<NewSeason>,
) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Created().json(create_season_service(&data.db, body.into_inner()).await?))
}

#[get("/seasons/{season_id}")]
async fn get_season_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(get_season_service(&data.db, path.into_inner()).await?))
}

#[get("/venues")]
async fn list_venues_handler(
    data: Data<AppState>,
    params: Query<ListParams>,
) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(list_venues_service(&data.db, params.into_inner()).await?))
}

#[post("/venues")]
async fn create_venue_handler(
    data: Data<AppState>,
    body: Json<NewVenue>,
) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Created().json(create_venue_service(&data.db, body.into_inner()).await?))
}

#[get("/venues/{venue_id}")]
async fn get_venue_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(get_venue_service(&data.db, path.into_inner()).await?))
}

#[get("/providers")]
async fn list_providers_handler(
    data: Data<AppState>,
    params: Query<ListParams>,
) -> Result<HttpResponse, ServiceError> {
    let providers = list_providers_service(&data.db, params.into_inner()).await?;
    Ok(HttpResponse::Ok().json(providers))
}

#[post("/providers")]
async fn create_provider_handler(
    data: Data<AppState>,
    body: Json<NewProvider>,
) -> Result<HttpResponse, ServiceError> {
    let provider = create_provider_service(&data.db, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(provider))
}

#[get("/providers/{provider_id}")]
async fn get_provider_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(get_provider_service(&data.db, path.into_inner()).await?))
}

#[get("/platforms")]
async fn list_platforms_handler(
    data: Data<AppState>,
    filter: Query<PlatformFilter>,
    params: Query<ListParams>,
) -> Result<HttpResponse, ServiceError> {
    let platforms =
        list_platforms_service(&data.db, filter.into_inner(), params.into_inner()).await?;
    Ok(HttpResponse::Ok().json(platforms))
}

#[post("/platforms")]
async fn create_platform_handler(
    data: Data<AppState>,
    body: Json<NewPlatform>,
) -> Result<HttpResponse, ServiceError> {
    let platform = create_platform_service(&data.db, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(platform))
}

#[get("/platforms/{platform_id}")]
async fn get_platform_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok().json(get_platform_service(&data.db, path.into_inner()).await?))
}

pub fn config(conf: &mut web::ServiceConfig) {
    conf.service(list_sports_handler)
        .service(create_sport_handler)
        .service(get_sport_handler)
        .service(list_governing_bodies_handler)
        .service(create_governing_body_handler)
        .service(get_governing_body_handler)
        .service(list_seasons_handler)
        .service(create_season_handler)
        .service(get_season_handler)
        .service(list_venues_handler)
        .service(create_venue_handler)
        .service(get_venue_handler)
        .service(list_providers_handler)
        .service(create_provider_handler)
        .service(get_provider_handler)
        .service(list_platforms_handler)
        .service(create_platform_handler)
        .service(get_platform_handler);
}
