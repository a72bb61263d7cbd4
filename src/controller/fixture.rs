use crate::model::fixture::{NewFixture, UpdateFixture};
use crate::model::response::{ListParams, WindowParams};
use crate::service::error::ServiceError;
use crate::service::fixture::{
    create_fixture_service, delete_fixture_service, get_fixture_service, list_fixtures_service,
    team_fixtures_service, update_fixture_service, upcoming_fixtures_service,
};
use crate::AppState;
use actix_web::web::{Data, Json, Path, Query};
use actix_web::{delete, get, post, put, web, HttpResponse};

#[get("/fixtures")]
async fn list_fixtures_handler(
    data: Data<AppState>,
    params: Query<ListParams>,
) -> Result<HttpResponse, ServiceError> {
    let fixtures = list_fixtures_service(&data.db, params.into_inner()).await?;
    Ok(HttpResponse::Ok().json(fixtures))
}

#[get("/fixtures/upcoming")]
async fn upcoming_fixtures_handler(
    data: Data<AppState>,
    window: Query<WindowParams>,
) -> Result<HttpResponse, ServiceError> {
    let fixtures = upcoming_fixtures_service(&data.db, window.into_inner()).await?;
    Ok(HttpResponse::Ok().json(fixtures))
}

#[get("/fixtures/team/{team_id}")]
async fn team_fixtures_handler(
    data: Data<AppState>,
    path: Path<i32>,
    window: Query<WindowParams>,
) -> Result<HttpResponse, ServiceError> {
    let fixtures = team_fixtures_service(&data.db, path.into_inner(), window.into_inner()).await?;
    Ok(HttpResponse::Ok().json(fixtures))
}

#[post("/fixtures")]
async fn create_fixture_handler(
    data: Data<AppState>,
    body: Json<NewFixture>,
) -> Result<HttpResponse, ServiceError> {
    let fixture = create_fixture_service(&data.db, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(fixture))
}

#[get("/fixtures/{fixture_id}")]
async fn get_fixture_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let fixture = get_fixture_service(&data.db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(fixture))
}

#[put("/fixtures/{fixture_id}")]
async fn update_fixture_handler(
    data: Data<AppState>,
    path: Path<i32>,
    body: Json<UpdateFixture>,
) -> Result<HttpResponse, ServiceError> {
    let fixture = update_fixture_service(&data.db, path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(fixture))
}

#[delete("/fixtures/{fixture_id}")]
async fn delete_fixture_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    delete_fixture_service(&data.db, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

// `upcoming` must be registered ahead of `{fixture_id}`.
pub fn config(conf: &mut web::ServiceConfig) {
    conf.service(upcoming_fixtures_handler)
        .service(team_fixtures_handler)
        .service(list_fixtures_handler)
        .service(create_fixture_handler)
        .service(get_fixture_handler)
        .service(update_fixture_handler)
        .service(delete_fixture_handler);
}
