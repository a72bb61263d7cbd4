use crate::model::response::ListParams;
use crate::model::territory::{NewTerritory, Territory};
use crate::repository::database::Database;
use crate::service::error::ServiceError;
use validator::Validate;

pub async fn list_territories_service(
    db: &Database,
    params: ListParams,
) -> Result<Vec<Territory>, ServiceError> {
    Ok(db.list_active_territories(params).await?)
}

pub async fn get_territory_service(
    db: &Database,
    territory_id: i32,
) -> Result<Territory, ServiceError> {
    db.find_territory(territory_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Territory"))
}

pub async fn create_territory_service(
    db: &Database,
    new_territory: NewTerritory,
) -> Result<Territory, ServiceError> {
    new_territory.validate()?;
    if db.find_territory_by_code(&new_territory.code).await?.is_some() {
        return Err(ServiceError::Conflict(format!(
            "Territory code {} already exists",
            new_territory.code
        )));
    }
    Ok(db.insert_territory(&new_territory).await?)
}
