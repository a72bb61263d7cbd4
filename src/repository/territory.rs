use crate::model::response::ListParams;
use crate::model::schema::territories;
use crate::model::territory::{NewTerritory, Territory};
use crate::repository::database::{Database, RepositoryError};
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;

impl Database {
    pub async fn list_active_territories(
        &self,
        params: ListParams,
    ) -> Result<Vec<Territory>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let rows = territories::table
            .filter(territories::is_active.eq(true))
            .order(territories::name.asc())
            .offset(params.offset())
            .limit(params.limit())
            .select(Territory::as_select())
            .load(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn find_territory(
        &self,
        territory_id: i32,
    ) -> Result<Option<Territory>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let territory = territories::table
            .find(territory_id)
            .select(Territory::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(territory)
    }

    /// Codes are stored upper-case.
    pub async fn find_territory_by_code(
        &self,
        territory_code: &str,
    ) -> Result<Option<Territory>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let territory = territories::table
            .filter(territories::code.eq(territory_code.trim().to_ascii_uppercase()))
            .select(Territory::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(territory)
    }

    pub async fn insert_territory(
        &self,
        new_territory: &NewTerritory,
    ) -> Result<Territory, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let territory = diesel::insert_into(territories::table)
            .values(new_territory)
            .returning(Territory::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(territory)
    }
}
