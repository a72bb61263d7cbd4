use crate::model::response::ListParams;
use crate::model::user::{RegisterUserSchema, UpdateUserSchema};
use crate::service::error::ServiceError;
use crate::service::user::{
    create_user_service, delete_user_service, get_user_service, list_users_service,
    update_user_service,
};
use crate::AppState;
use actix_web::web::{Data, Json, Path, Query};
use actix_web::{delete, get, post, put, web, HttpResponse};

#[get("/users")]
async fn list_users_handler(
    data: Data<AppState>,
    params: Query<ListParams>,
) -> Result<HttpResponse, ServiceError> {
    let users = list_users_service(&data.db, params.into_inner()).await?;
    Ok(HttpResponse::Ok().json(users))
}

#[post("/users")]
async fn register_user_handler(
    data: Data<AppState>,
    new_user: Json<RegisterUserSchema>,
) -> Result<HttpResponse, ServiceError> {
    let user = create_user_service(&data.db, new_user.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

#[get("/users/{user_id}")]
async fn get_user_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let user = get_user_service(&data.db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[put("/users/{user_id}")]
async fn update_user_handler(
    data: Data<AppState>,
    path: Path<i32>,
    body: Json<UpdateUserSchema>,
) -> Result<HttpResponse, ServiceError> {
    let user = update_user_service(&data.db, path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[delete("/users/{user_id}")]
async fn delete_user_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    delete_user_service(&data.db, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn config(conf: &mut web::ServiceConfig) {
    conf.service(list_users_handler)
        .service(register_user_handler)
        .service(get_user_handler)
        .service(update_user_handler)
        .service(delete_user_handler);
}
