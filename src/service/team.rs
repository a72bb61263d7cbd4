use crate::model::response::ListParams;
use crate::model::team::{NewTeam, Team, UpdateTeam};
use crate::repository::team::TeamStore;
use crate::service::error::ServiceError;
use chrono::Utc;
use validator::Validate;

pub async fn list_teams_service<S: TeamStore + ?Sized>(
    store: &S,
    params: ListParams,
) -> Result<Vec<Team>, ServiceError> {
    Ok(store.list_active_teams(params).await?)
}

/// Soft-deleted teams are still returned by id.
pub async fn get_team_service<S: TeamStore + ?Sized>(
    store: &S,
    team_id: i32,
) -> Result<Team, ServiceError> {
    store
        .find_team(team_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Team"))
}

pub async fn create_team_service<S: TeamStore + ?Sized>(
    store: &S,
    new_team: NewTeam,
) -> Result<Team, ServiceError> {
    new_team.validate()?;
    Ok(store.insert_team(&new_team).await?)
}

pub async fn update_team_service<S: TeamStore + ?Sized>(
    store: &S,
    team_id: i32,
    changes: UpdateTeam,
) -> Result<Team, ServiceError> {
    changes.validate()?;
    let mut team = get_team_service(store, team_id).await?;
    changes.merge_into(&mut team);
    team.updated_at = Utc::now();
    Ok(store.save_team(&team).await?)
}

pub async fn delete_team_service<S: TeamStore + ?Sized>(
    store: &S,
    team_id: i32,
) -> Result<(), ServiceError> {
    let mut team = get_team_service(store, team_id).await?;
    team.is_active = false;
    team.updated_at = Utc::now();
    store.save_team(&team).await?;
    Ok(())
}
