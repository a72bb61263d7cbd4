use crate::model::response::ListParams;
use crate::model::territory::NewTerritory;
use crate::service::error::ServiceError;
use crate::service::territory::{
    create_territory_service, get_territory_service, list_territories_service,
};
use crate::AppState;
use actix_web::web::{Data, Json, Path, Query};
use actix_web::{get, post, web, HttpResponse};

#[get("/territories")]
async fn list_territories_handler(
    data: Data<AppState>,
    params: Query<ListParams>,
) -> Result<HttpResponse, ServiceError> {
    let territories = list_territories_service(&data.db, params.into_inner()).await?;
    Ok(HttpResponse::Ok().json(territories))
}

#[post("/territories")]
async fn create_territory_handler(
    data: Data<AppState>,
    body: Json<NewTerritory>,
) -> Result<HttpResponse, ServiceError> {
    let territory = create_territory_service(&data.db, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(territory))
}

#[get("/territories/{territory_id}")]
async fn get_territory_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let territory = get_territory_service(&data.db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(territory))
}

pub fn config(conf: &mut web::ServiceConfig) {
    conf.service(list_territories_handler)
        .service(create_territory_handler)
        .service(get_territory_handler);
}
