use crate::model::response::ListParams;
use crate::model::rights::{NewFixtureRights, NewRightsPackage};
use crate::service::catalog::{
    create_rights_package_service, get_rights_package_service, list_rights_packages_service,
};
use crate::service::error::ServiceError;
use crate::service::rights::{
    bulk_resolve_service, create_rights_service, delete_rights_service, fixture_rights_service,
    resolve_rights_service, BulkResolveRequest, ResolveParams,
};
use crate::AppState;
use actix_web::web::{Data, Json, Path, Query};
use actix_web::{delete, get, post, web, HttpResponse};

#[get("/rights/fixture/{fixture_id}/territory/{territory_id}")]
async fn resolve_rights_handler(
    data: Data<AppState>,
    path: Path<(i32, i32)>,
    params: Query<ResolveParams>,
) -> Result<HttpResponse, ServiceError> {
    let (fixture_id, territory_id) = path.into_inner();
    let resolved =
        resolve_rights_service(&data.db, fixture_id, territory_id, params.into_inner()).await?;
    Ok(HttpResponse::Ok().json(resolved))
}

#[get("/rights/fixture/{fixture_id}")]
async fn fixture_rights_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let rights = fixture_rights_service(&data.db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(rights))
}

#[post("/rights/resolve/bulk")]
async fn bulk_resolve_handler(
    data: Data<AppState>,
    body: Json<BulkResolveRequest>,
) -> Result<HttpResponse, ServiceError> {
    let results = bulk_resolve_service(&data.db, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(results))
}

#[post("/rights")]
async fn create_rights_handler(
    data: Data<AppState>,
    body: Json<NewFixtureRights>,
) -> Result<HttpResponse, ServiceError> {
    let rights = create_rights_service(&data.db, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(rights))
}

#[delete("/rights/{rights_id}")]
async fn delete_rights_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    delete_rights_service(&data.db, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/rights/packages")]
async fn list_packages_handler(
    data: Data<AppState>,
    params: Query<ListParams>,
) -> Result<HttpResponse, ServiceError> {
    let packages = list_rights_packages_service(&data.db, params.into_inner()).await?;
    Ok(HttpResponse::Ok().json(packages))
}

#[post("/rights/packages")]
async fn create_package_handler(
    data: Data<AppState>,
    body: Json<NewRightsPackage>,
) -> Result<HttpResponse, ServiceError> {
    let package = create_rights_package_service(&data.db, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(package))
}

#[get("/rights/packages/{package_id}")]
async fn get_package_handler(
    data: Data<AppState>,
    path: Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let package = get_rights_package_service(&data.db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(package))
}

pub fn config(conf: &mut web::ServiceConfig) {
    conf.service(resolve_rights_handler)
        .service(fixture_rights_handler)
        .service(bulk_resolve_handler)
        .service(list_packages_handler)
        .service(create_package_handler)
        .service(get_package_handler)
        .service(create_rights_handler)
        .service(delete_rights_handler);
}
