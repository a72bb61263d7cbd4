use crate::model::response::ListParams;
use crate::model::schema::teams;
use crate::model::team::{NewTeam, Team};
use crate::repository::database::{Database, RepositoryError};
use async_trait::async_trait;
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;

/// Team persistence used by the team endpoints.
#[async_trait]
pub trait TeamStore: Send + Sync {
    /// Active teams only, ordered by id.
    async fn list_active_teams(&self, params: ListParams) -> Result<Vec<Team>, RepositoryError>;

    /// Returns inactive teams as well.
    async fn find_team(&self, team_id: i32) -> Result<Option<Team>, RepositoryError>;

    async fn insert_team(&self, new_team: &NewTeam) -> Result<Team, RepositoryError>;

    async fn save_team(&self, team: &Team) -> Result<Team, RepositoryError>;
}

impl Database {
    /// Every active team, used as the fuzzy-match universe during ingestion.
    pub async fn all_active_teams(&self) -> Result<Vec<Team>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let rows = teams::table
            .filter(teams::is_active.eq(true))
            .order(teams::id.asc())
            .select(Team::as_select())
            .load(&mut conn)
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl TeamStore for Database {
    async fn list_active_teams(&self, params: ListParams) -> Result<Vec<Team>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let rows = teams::table
            .filter(teams::is_active.eq(true))
            .order(teams::id.asc())
            .offset(params.offset())
            .limit(params.limit())
            .select(Team::as_select())
            .load(&mut conn)
            .await?;
        Ok(rows)
    }

    async fn find_team(&self, team_id: i32) -> Result<Option<Team>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let team = teams::table
            .find(team_id)
            .select(Team::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(team)
    }

    async fn insert_team(&self, new_team: &NewTeam) -> Result<Team, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let team = diesel::insert_into(teams::table)
            .values(new_team)
            .returning(Team::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(team)
    }

    async fn save_team(&self, team: &Team) -> Result<Team, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let team = diesel::update(teams::table.find(team.id))
            .set(team)
            .returning(Team::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(team)
    }
}
