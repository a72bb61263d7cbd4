use crate::model::competition::{Competition, NewCompetition, UpdateCompetition};
use crate::model::response::ListParams;
use crate::repository::database::Database;
use crate::service::error::ServiceError;
use chrono::Utc;
use validator::Validate;

pub async fn list_competitions_service(
    db: &Database,
    params: ListParams,
) -> Result<Vec<Competition>, ServiceError> {
    Ok(db.list_active_competitions(params).await?)
}

pub async fn get_competition_service(
    db: &Database,
    competition_id: i32,
) -> Result<Competition, ServiceError> {
    db.find_competition(competition_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Competition"))
}

pub async fn create_competition_service(
    db: &Database,
    new_competition: NewCompetition,
) -> Result<Competition, ServiceError> {
    new_competition.validate()?;
    Ok(db.insert_competition(&new_competition).await?)
}

pub async fn update_competition_service(
    db: &Database,
    competition_id: i32,
    changes: UpdateCompetition,
) -> Result<Competition, ServiceError> {
    changes.validate()?;
    let mut competition = get_competition_service(db, competition_id).await?;
    changes.merge_into(&mut competition);
    competition.updated_at = Utc::now();
    Ok(db.save_competition(&competition).await?)
}

pub async fn delete_competition_service(
    db: &Database,
    competition_id: i32,
) -> Result<(), ServiceError> {
    let mut competition = get_competition_service(db, competition_id).await?;
    competition.is_active = false;
    competition.updated_at = Utc::now();
    db.save_competition(&competition).await?;
    Ok(())
}
