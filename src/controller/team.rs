use crate::model::response::ListParams;
use crate::model::team::{NewTeam, UpdateTeam};
use crate::service::error::ServiceError;
use crate::service::team::{
    create_team_service, delete_team_service, get_team_service, list_teams_service,
    update_team_service,
};
use crate::AppState;
use actix_web::web::{Data, Json, Path, Query};
use actix_web::{delete, get, post, put, web, HttpResponse};

#[get("/teams")]
async fn list_teams_handler(
    data: Data<AppState>,
    params: Query<ListParams>,
) -> Result<HttpResponse, ServiceError> {
    let teams = list_teams_service(&data.db, params.into_inner()).await?;
    Ok(HttpResponse::Ok().json(teams))
}

#[post("/teams")]
async fn create_team_handler(
    data: Data<AppState>,
    body: Json<NewTeam>,
) -> Result<HttpResponse, ServiceError> {
    let team = create_team_service(&data.db, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(team))
}

#[get("/teams/{team_id}")]
async fn get_team_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let team = get_team_service(&data.db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(team))
}

#[put("/teams/{team_id}")]
async fn update_team_handler(
    data: Data<AppState>,
    path: Path<i32>,
    body: Json<UpdateTeam>,
) -> Result<HttpResponse, ServiceError> {
    let team = update_team_service(&data.db, path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(team))
}

#[delete("/teams/{team_id}")]
async fn delete_team_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    delete_team_service(&data.db, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn config(conf: &mut web::ServiceConfig) {
    conf.service(list_teams_handler)
        .service(create_team_handler)
        .service(get_team_handler)
        .service(update_team_handler)
        .service(delete_team_handler);
}
