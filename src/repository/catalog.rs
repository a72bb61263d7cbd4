use crate::model::provider::{NewPlatform, NewProvider, Platform, Provider};
use crate::model::response::ListParams;
use crate::model::schema::{governing_bodies, platforms, providers, seasons, sports, venues};
use crate::model::season::{NewSeason, Season};
use crate::model::sport::{GoverningBody, NewGoverningBody, NewSport, Sport};
use crate::model::venue::{NewVenue, Venue};
use crate::repository::database::{Database, RepositoryError};
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;

// Reference data: list (active only), get by id, create.
impl Database {
    pub async fn list_active_sports(&self, params: ListParams) -> Result<Vec<Sport>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let rows = sports::table
            .filter(sports::is_active.eq(true))
            .order(sports::id.asc())
            .offset(params.offset())
            .limit(params.limit())
            .select(Sport::as_select())
            .load(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn find_sport(&self, sport_id: i32) -> Result<Option<Sport>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let sport = sports::table
            .find(sport_id)
            .select(Sport::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(sport)
    }

    pub async fn insert_sport(&self, new_sport: &NewSport) -> Result<Sport, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let sport = diesel::insert_into(sports::table)
            .values(new_sport)
            .returning(Sport::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(sport)
    }

    pub async fn list_active_governing_bodies(
        &self,
        params: ListParams,
    ) -> Result<Vec<GoverningBody>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let rows = governing_bodies::table
            .filter(governing_bodies::is_active.eq(true))
            .order(governing_bodies::id.asc())
            .offset(params.offset())
            .limit(params.limit())
            .select(GoverningBody::as_select())
            .load(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn find_governing_body(
        &self,
        body_id: i32,
    ) -> Result<Option<GoverningBody>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let body = governing_bodies::table
            .find(body_id)
            .select(GoverningBody::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(body)
    }

    pub async fn insert_governing_body(
        &self,
        new_body: &NewGoverningBody,
    ) -> Result<GoverningBody, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let body = diesel::insert_into(governing_bodies::table)
            .values(new_body)
            .returning(GoverningBody::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(body)
    }

    pub async fn list_active_seasons(
        &self,
        competition_id: Option<i32>,
        params: ListParams,
    ) -> Result<Vec<Season>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let mut query = seasons::table
            .filter(seasons::is_active.eq(true))
            .select(Season::as_select())
            .into_boxed();
        if let Some(competition_id) = competition_id {
            query = query.filter(seasons::competition_id.eq(competition_id));
        }
        let rows = query
            .order((seasons::year.desc(), seasons::id.asc()))
            .offset(params.offset())
            .limit(params.limit())
            .load(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn find_season(&self, season_id: i32) -> Result<Option<Season>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let season = seasons::table
            .find(season_id)
            .select(Season::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(season)
    }

    pub async fn insert_season(&self, new_season: &NewSeason) -> Result<Season, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let season = diesel::insert_into(seasons::table)
            .values(new_season)
            .returning(Season::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(season)
    }

    pub async fn list_active_venues(&self, params: ListParams) -> Result<Vec<Venue>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let rows = venues::table
            .filter(venues::is_active.eq(true))
            .order(venues::id.asc())
            .offset(params.offset())
            .limit(params.limit())
            .select(Venue::as_select())
            .load(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn find_venue(&self, venue_id: i32) -> Result<Option<Venue>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let venue = venues::table
            .find(venue_id)
            .select(Venue::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(venue)
    }

    pub async fn insert_venue(&self, new_venue: &NewVenue) -> Result<Venue, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let venue = diesel::insert_into(venues::table)
            .values(new_venue)
            .returning(Venue::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(venue)
    }

    pub async fn list_active_providers(
        &self,
        params: ListParams,
    ) -> Result<Vec<Provider>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let rows = providers::table
            .filter(providers::is_active.eq(true))
            .order(providers::id.asc())
            .offset(params.offset())
            .limit(params.limit())
            .select(Provider::as_select())
            .load(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn find_provider(&self, provider_id: i32) -> Result<Option<Provider>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let provider = providers::table
            .find(provider_id)
            .select(Provider::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(provider)
    }

    pub async fn insert_provider(&self, new_provider: &NewProvider) -> Result<Provider, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let provider = diesel::insert_into(providers::table)
            .values(new_provider)
            .returning(Provider::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(provider)
    }

    pub async fn list_active_platforms(
        &self,
        provider_id: Option<i32>,
        params: ListParams,
    ) -> Result<Vec<Platform>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let mut query = platforms::table
            .filter(platforms::is_active.eq(true))
            .select(Platform::as_select())
            .into_boxed();
        if let Some(provider_id) = provider_id {
            query = query.filter(platforms::provider_id.eq(provider_id));
        }
        let rows = query
            .order(platforms::id.asc())
            .offset(params.offset())
            .limit(params.limit())
            .load(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn find_platform(&self, platform_id: i32) -> Result<Option<Platform>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let platform = platforms::table
            .find(platform_id)
            .select(Platform::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(platform)
    }

    pub async fn insert_platform(&self, new_platform: &NewPlatform) -> Result<Platform, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let platform = diesel::insert_into(platforms::table)
            .values(new_platform)
            .returning(Platform::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(platform)
    }
}
