use crate::model::competition::{Competition, NewCompetition};
use crate::model::response::ListParams;
use crate::model::schema::competitions;
use crate::repository::database::{Database, RepositoryError};
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;

impl Database {
    pub async fn list_active_competitions(
        &self,
        params: ListParams,
    ) -> Result<Vec<Competition>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let rows = competitions::table
            .filter(competitions::is_active.eq(true))
            .order(competitions::id.asc())
            .offset(params.offset())
            .limit(params.limit())
            .select(Competition::as_select())
            .load(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn find_competition(
        &self,
        competition_id: i32,
    ) -> Result<Option<Competition>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let competition = competitions::table
            .find(competition_id)
            .select(Competition::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(competition)
    }

    pub async fn insert_competition(
        &self,
        new_competition: &NewCompetition,
    ) -> Result<Competition, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let competition = diesel::insert_into(competitions::table)
            .values(new_competition)
            .returning(Competition::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(competition)
    }

    pub async fn save_competition(
        &self,
        competition: &Competition,
    ) -> Result<Competition, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let competition = diesel::update(competitions::table.find(competition.id))
            .set(competition)
            .returning(Competition::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(competition)
    }
}
