use crate::model::fixture::{Fixture, NewFixture, UpdateFixture};
use crate::model::response::{ListParams, WindowParams};
use crate::repository::database::Database;
use crate::service::error::ServiceError;
use chrono::Utc;
use validator::Validate;

pub async fn list_fixtures_service(
    db: &Database,
    params: ListParams,
) -> Result<Vec<Fixture>, ServiceError> {
    Ok(db.list_active_fixtures(params).await?)
}

/// Scheduled fixtures that have not kicked off yet, soonest first.
pub async fn upcoming_fixtures_service(
    db: &Database,
    window: WindowParams,
) -> Result<Vec<Fixture>, ServiceError> {
    Ok(db.upcoming_fixtures(Utc::now(), window.limit()).await?)
}

/// Home and away fixtures for a team, most recent first.
pub async fn team_fixtures_service(
    db: &Database,
    team_id: i32,
    window: WindowParams,
) -> Result<Vec<Fixture>, ServiceError> {
    Ok(db.fixtures_for_team(team_id, window.limit()).await?)
}

pub async fn get_fixture_service(db: &Database, fixture_id: i32) -> Result<Fixture, ServiceError> {
    db.find_fixture(fixture_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Fixture"))
}

pub async fn create_fixture_service(
    db: &Database,
    new_fixture: NewFixture,
) -> Result<Fixture, ServiceError> {
    new_fixture.validate()?;
    Ok(db.insert_fixture(&new_fixture).await?)
}

pub async fn update_fixture_service(
    db: &Database,
    fixture_id: i32,
    changes: UpdateFixture,
) -> Result<Fixture, ServiceError> {
    changes.validate()?;
    let mut fixture = get_fixture_service(db, fixture_id).await?;
    changes.merge_into(&mut fixture);
    fixture.updated_at = Utc::now();
    Ok(db.save_fixture(&fixture).await?)
}

pub async fn delete_fixture_service(db: &Database, fixture_id: i32) -> Result<(), ServiceError> {
    let mut fixture = get_fixture_service(db, fixture_id).await?;
    fixture.is_active = false;
    fixture.updated_at = Utc::now();
    db.save_fixture(&fixture).await?;
    Ok(())
}
