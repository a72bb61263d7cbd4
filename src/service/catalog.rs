use crate::model::provider::{NewPlatform, NewProvider, Platform, Provider};
use crate::model::response::ListParams;
use crate::model::rights::{NewRightsPackage, RightsPackage};
use crate::model::season::{NewSeason, Season};
use crate::model::sport::{GoverningBody, NewGoverningBody, NewSport, Sport};
use crate::model::venue::{NewVenue, Venue};
use crate::repository::database::Database;
use crate::service::error::ServiceError;
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

#[derive(Debug, Deserialize)]
pub struct SeasonFilter {
    pub competition_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct PlatformFilter {
    pub provider_id: Option<i32>,
}

pub async fn list_sports_service(db: &Database, params: ListParams) -> Result<Vec<Sport>, ServiceError> {
    Ok(db.list_active_sports(params).await?)
}

pub async fn get_sport_service(db: &Database, sport_id: i32) -> Result<Sport, ServiceError> {
    db.find_sport(sport_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Sport"))
}

pub async fn create_sport_service(db: &Database, new_sport: NewSport) -> Result<Sport, ServiceError> {
    new_sport.validate()?;
    Ok(db.insert_sport(&new_sport).await?)
}

pub async fn list_governing_bodies_service(
    db: &Database,
    params: ListParams,
) -> Result<Vec<GoverningBody>, ServiceError> {
    Ok(db.list_active_governing_bodies(params).await?)
}

pub async fn get_governing_body_service(
    db: &Database,
    body_id: i32,
) -> Result<GoverningBody, ServiceError> {
    db.find_governing_body(body_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Governing body"))
}

pub async fn create_governing_body_service(
    db: &Database,
    new_body: NewGoverningBody,
) -> Result<GoverningBody, ServiceError> {
    new_body.validate()?;
    Ok(db.insert_governing_body(&new_body).await?)
}

pub async fn list_seasons_service(
    db: &Database,
    filter: SeasonFilter,
    params: ListParams,
) -> Result<Vec<Season>, ServiceError> {
    Ok(db.list_active_seasons(filter.competition_id, params).await?)
}

pub async fn get_season_service(db: &Database, season_id: i32) -> Result<Season, ServiceError> {
    db.find_season(season_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Season"))
}

pub async fn create_season_service(db: &Database, new_season: NewSeason) -> Result<Season, ServiceError> {
    new_season.validate()?;
    Ok(db.insert_season(&new_season).await?)
}

pub async fn list_venues_service(db: &Database, params: ListParams) -> Result<Vec<Venue>, ServiceError> {
    Ok(db.list_active_venues(params).await?)
}

pub async fn get_venue_service(db: &Database, venue_id: i32) -> Result<Venue, ServiceError> {
    db.find_venue(venue_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Venue"))
}

pub async fn create_venue_service(db: &Database, new_venue: NewVenue) -> Result<Venue, ServiceError> {
    new_venue.validate()?;
    Ok(db.insert_venue(&new_venue).await?)
}

pub async fn list_providers_service(
    db: &Database,
    params: ListParams,
) -> Result<Vec<Provider>, ServiceError> {
    Ok(db.list_active_providers(params).await?)
}

pub async fn get_provider_service(db: &Database, provider_id: i32) -> Result<Provider, ServiceError> {
    db.find_provider(provider_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Provider"))
}

pub async fn create_provider_service(
    db: &Database,
    new_provider: NewProvider,
) -> Result<Provider, ServiceError> {
    new_provider.validate()?;
    Ok(db.insert_provider(&new_provider).await?)
}

pub async fn list_platforms_service(
    db: &Database,
    filter: PlatformFilter,
    params: ListParams,
) -> Result<Vec<Platform>, ServiceError> {
    Ok(db.list_active_platforms(filter.provider_id, params).await?)
}

pub async fn get_platform_service(db: &Database, platform_id: i32) -> Result<Platform, ServiceError> {
    db.find_platform(platform_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Platform"))
}

pub async fn create_platform_service(
    db: &Database,
    new_platform: NewPlatform,
) -> Result<Platform, ServiceError> {
    new_platform.validate()?;
    Ok(db.insert_platform(&new_platform).await?)
}

fn validate_package_window(package: &NewRightsPackage) -> Result<(), ValidationErrors> {
    if package.end_date < package.start_date {
        let mut errors = ValidationErrors::new();
        let mut err = ValidationError::new("date_range");
        err.message = Some("end_date must not be before start_date".into());
        errors.add("end_date", err);
        return Err(errors);
    }
    Ok(())
}

pub async fn list_rights_packages_service(
    db: &Database,
    params: ListParams,
) -> Result<Vec<RightsPackage>, ServiceError> {
    Ok(db.list_active_rights_packages(params).await?)
}

pub async fn get_rights_package_service(
    db: &Database,
    package_id: i32,
) -> Result<RightsPackage, ServiceError> {
    db.find_rights_package(package_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Rights package"))
}

pub async fn create_rights_package_service(
    db: &Database,
    new_package: NewRightsPackage,
) -> Result<RightsPackage, ServiceError> {
    new_package.validate()?;
    validate_package_window(&new_package)?;
    Ok(db.insert_rights_package(&new_package).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_window_must_not_be_inverted() {
        let body: NewRightsPackage = serde_json::from_str(
            r#"{"provider_id": 1, "name": "Six Nations 2025",
                "start_date": "2025-03-01", "end_date": "2025-02-01"}"#,
        )
        .unwrap();
        assert!(validate_package_window(&body).is_err());

        let body: NewRightsPackage = serde_json::from_str(
            r#"{"provider_id": 1, "name": "Six Nations 2025",
                "start_date": "2025-02-01", "end_date": "2025-02-01"}"#,
        )
        .unwrap();
        assert!(validate_package_window(&body).is_ok());
        assert!(!body.is_exclusive);
    }
}
