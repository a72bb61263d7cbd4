use crate::model::fixture::{Fixture, FixtureStatus, NewFixture};
use crate::model::response::ListParams;
use crate::model::schema::fixtures;
use crate::repository::database::{Database, RepositoryError};
use chrono::{DateTime, Utc};
use diesel::{BoolExpressionMethods, ExpressionMethods, OptionalExtension, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;

impl Database {
    pub async fn list_active_fixtures(
        &self,
        params: ListParams,
    ) -> Result<Vec<Fixture>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let rows = fixtures::table
            .filter(fixtures::is_active.eq(true))
            .order(fixtures::id.asc())
            .offset(params.offset())
            .limit(params.limit())
            .select(Fixture::as_select())
            .load(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn upcoming_fixtures(
        &self,
        now: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<Fixture>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let rows = fixtures::table
            .filter(fixtures::is_active.eq(true))
            .filter(fixtures::status.eq(FixtureStatus::Scheduled.as_str()))
            .filter(fixtures::match_date.gt(now))
            .order(fixtures::match_date.asc())
            .limit(limit)
            .select(Fixture::as_select())
            .load(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn fixtures_for_team(
        &self,
        team_id: i32,
        limit: i64,
    ) -> Result<Vec<Fixture>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let rows = fixtures::table
            .filter(fixtures::is_active.eq(true))
            .filter(
                fixtures::home_team_id
                    .eq(team_id)
                    .or(fixtures::away_team_id.eq(team_id)),
            )
            .order(fixtures::match_date.desc())
            .limit(limit)
            .select(Fixture::as_select())
            .load(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn find_fixture(&self, fixture_id: i32) -> Result<Option<Fixture>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let fixture = fixtures::table
            .find(fixture_id)
            .select(Fixture::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(fixture)
    }

    pub async fn find_fixture_by_external_id(
        &self,
        source: &str,
        external_id: &str,
    ) -> Result<Option<Fixture>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let fixture = fixtures::table
            .filter(fixtures::source.eq(source))
            .filter(fixtures::external_id.eq(external_id))
            .select(Fixture::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(fixture)
    }

    pub async fn insert_fixture(&self, new_fixture: &NewFixture) -> Result<Fixture, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let fixture = diesel::insert_into(fixtures::table)
            .values(new_fixture)
            .returning(Fixture::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(fixture)
    }

    pub async fn save_fixture(&self, fixture: &Fixture) -> Result<Fixture, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let fixture = diesel::update(fixtures::table.find(fixture.id))
            .set(fixture)
            .returning(Fixture::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(fixture)
    }
}
