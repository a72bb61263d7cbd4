use crate::model::response::FixtureRightsList;
use crate::model::rights::{FixtureRights, NewFixtureRights};
use crate::repository::database::{Database, RepositoryError};
use crate::rights::engine::{Resolution, ResolvedRights, RightsResolutionEngine};
use crate::rights::rules::UserContext;
use crate::service::error::ServiceError;
use chrono::Utc;
use log::error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    pub user_id: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct BulkResolveRequest {
    #[validate(length(min = 1, max = 500, message = "Between 1 and 500 fixture ids are accepted"))]
    pub fixture_ids: Vec<i32>,
    pub territory_id: i32,
}

/// One value of the bulk response map.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BulkEntry {
    Resolution(Resolution),
    Error { status: &'static str, detail: String },
}

pub fn bulk_entries(
    results: BTreeMap<i32, Result<Resolution, RepositoryError>>,
) -> BTreeMap<i32, BulkEntry> {
    results
        .into_iter()
        .map(|(fixture_id, outcome)| {
            let entry = match outcome {
                Ok(resolution) => BulkEntry::Resolution(resolution),
                Err(err) => {
                    error!(
                        "An error occurred while resolving rights for fixture {}. The error: {:?}",
                        fixture_id, err
                    );
                    BulkEntry::Error {
                        status: "error",
                        detail: "Internal server error".to_string(),
                    }
                }
            };
            (fixture_id, entry)
        })
        .collect()
}

pub async fn resolve_rights_service(
    db: &Database,
    fixture_id: i32,
    territory_id: i32,
    params: ResolveParams,
) -> Result<ResolvedRights, ServiceError> {
    let user = params.user_id.map(|user_id| UserContext { user_id });
    let engine = RightsResolutionEngine::new(db);
    match engine.resolve(fixture_id, territory_id, user.as_ref()).await? {
        Resolution::Resolved(rights) => Ok(rights),
        Resolution::NotFound { reason } => Err(ServiceError::NotFound(reason.message().to_string())),
    }
}

pub async fn bulk_resolve_service(
    db: &Database,
    request: BulkResolveRequest,
) -> Result<BTreeMap<i32, BulkEntry>, ServiceError> {
    request.validate()?;
    let engine = RightsResolutionEngine::new(db);
    let results = engine
        .resolve_bulk(&request.fixture_ids, request.territory_id)
        .await;
    Ok(bulk_entries(results))
}

pub async fn fixture_rights_service(
    db: &Database,
    fixture_id: i32,
) -> Result<FixtureRightsList, ServiceError> {
    if db.find_fixture(fixture_id).await?.is_none() {
        return Err(ServiceError::not_found("Fixture"));
    }
    let rights = db.rights_for_fixture(fixture_id).await?;
    Ok(FixtureRightsList { fixture_id, rights })
}

pub async fn create_rights_service(
    db: &Database,
    new_rights: NewFixtureRights,
) -> Result<FixtureRights, ServiceError> {
    new_rights.validate()?;
    if db.find_fixture(new_rights.fixture_id).await?.is_none() {
        return Err(ServiceError::not_found("Fixture"));
    }
    if db.find_territory(new_rights.territory_id).await?.is_none() {
        return Err(ServiceError::not_found("Territory"));
    }
    if let Some(package_id) = new_rights.rights_package_id {
        if db.find_rights_package(package_id).await?.is_none() {
            return Err(ServiceError::not_found("Rights package"));
        }
    }
    Ok(db.insert_fixture_rights(&new_rights).await?)
}

pub async fn delete_rights_service(db: &Database, rights_id: i32) -> Result<(), ServiceError> {
    let mut rights = db
        .find_fixture_rights(rights_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Rights entry"))?;
    rights.is_active = false;
    rights.updated_at = Utc::now();
    db.save_fixture_rights(&rights).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rights::engine::NotFoundReason;

    #[test]
    fn bulk_entries_flatten_errors() {
        let mut results = BTreeMap::new();
        results.insert(
            2,
            Ok(Resolution::NotFound {
                reason: NotFoundReason::NoRights,
            }),
        );
        results.insert(
            1,
            Err(RepositoryError::Database(diesel::result::Error::NotFound)),
        );

        let json = serde_json::to_value(bulk_entries(results)).unwrap();
        assert_eq!(json["1"]["status"], "error");
        assert_eq!(json["1"]["detail"], "Internal server error");
        assert_eq!(json["2"]["status"], "not_found");
        assert_eq!(json["2"]["reason"], "no_rights");
    }

    #[test]
    fn bulk_request_needs_ids() {
        let request: BulkResolveRequest =
            serde_json::from_str(r#"{"fixture_ids": [], "territory_id": 1}"#).unwrap();
        assert!(request.validate().is_err());
    }
}
