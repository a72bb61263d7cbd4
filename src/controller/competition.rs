use crate::model::competition::{NewCompetition, UpdateCompetition};
use crate::model::response::ListParams;
use crate::service::competition::{
    create_competition_service, delete_competition_service, get_competition_service,
    list_competitions_service, update_competition_service,
};
use crate::service::error::ServiceError;
use crate::AppState;
use actix_web::web::{Data, Json, Path, Query};
use actix_web::{delete, get, post, put, web, HttpResponse};

#[get("/competitions")]
async fn list_competitions_handler(
    data: Data<AppState>,
    params: Query<ListParams>,
) -> Result<HttpResponse, ServiceError> {
    let competitions = list_competitions_service(&data.db, params.into_inner()).await?;
    Ok(HttpResponse::Ok().json(competitions))
}

#[post("/competitions")]
async fn create_competition_handler(
    data: Data<AppState>,
    body: Json<NewCompetition>,
) -> Result<HttpResponse, ServiceError> {
    let competition = create_competition_service(&data.db, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(competition))
}

#[get("/competitions/{competition_id}")]
async fn get_competition_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let competition = get_competition_service(&data.db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(competition))
}

#[put("/competitions/{competition_id}")]
async fn update_competition_handler(
    data: Data<AppState>,
    path: Path<i32>,
    body: Json<UpdateCompetition>,
) -> Result<HttpResponse, ServiceError> {
    let competition =
        update_competition_service(&data.db, path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(competition))
}

#[delete("/competitions/{competition_id}")]
async fn delete_competition_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    delete_competition_service(&data.db, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn config(conf: &mut web::ServiceConfig) {
    conf.service(list_competitions_handler)
        .service(create_competition_handler)
        .service(get_competition_handler)
        .service(update_competition_handler)
        .service(delete_competition_handler);
}
