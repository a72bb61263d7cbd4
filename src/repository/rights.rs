use crate::model::response::ListParams;
use crate::model::rights::{FixtureRights, NewFixtureRights, NewRightsPackage, RightsPackage};
use crate::model::schema::{fixture_rights, rights_packages};
use crate::repository::database::{Database, RepositoryError};
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;

impl Database {
    /// Active rows for the pair, lowest id first.
    pub async fn active_rights(
        &self,
        fixture_id: i32,
        territory_id: i32,
    ) -> Result<Vec<FixtureRights>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let rows = fixture_rights::table
            .filter(fixture_rights::fixture_id.eq(fixture_id))
            .filter(fixture_rights::territory_id.eq(territory_id))
            .filter(fixture_rights::is_active.eq(true))
            .order(fixture_rights::id.asc())
            .select(FixtureRights::as_select())
            .load(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn rights_for_fixture(
        &self,
        fixture_id: i32,
    ) -> Result<Vec<FixtureRights>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let rows = fixture_rights::table
            .filter(fixture_rights::fixture_id.eq(fixture_id))
            .order(fixture_rights::id.asc())
            .select(FixtureRights::as_select())
            .load(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn find_fixture_rights(
        &self,
        rights_id: i32,
    ) -> Result<Option<FixtureRights>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let rights = fixture_rights::table
            .find(rights_id)
            .select(FixtureRights::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(rights)
    }

    /// Natural key used by rights ingestion.
    pub async fn find_fixture_rights_for_platform(
        &self,
        fixture_id: i32,
        territory_id: i32,
        platform_name: &str,
    ) -> Result<Option<FixtureRights>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let rights = fixture_rights::table
            .filter(fixture_rights::fixture_id.eq(fixture_id))
            .filter(fixture_rights::territory_id.eq(territory_id))
            .filter(fixture_rights::platform_name.eq(platform_name))
            .order(fixture_rights::id.asc())
            .select(FixtureRights::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(rights)
    }

    pub async fn insert_fixture_rights(
        &self,
        new_rights: &NewFixtureRights,
    ) -> Result<FixtureRights, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let rights = diesel::insert_into(fixture_rights::table)
            .values(new_rights)
            .returning(FixtureRights::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(rights)
    }

    pub async fn save_fixture_rights(
        &self,
        rights: &FixtureRights,
    ) -> Result<FixtureRights, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let rights = diesel::update(fixture_rights::table.find(rights.id))
            .set(rights)
            .returning(FixtureRights::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(rights)
    }

    pub async fn rights_packages_by_ids(
        &self,
        package_ids: &[i32],
    ) -> Result<Vec<RightsPackage>, RepositoryError> {
        if package_ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.get_db_conn().await?;
        let rows = rights_packages::table
            .filter(rights_packages::id.eq_any(package_ids))
            .select(RightsPackage::as_select())
            .load(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn list_active_rights_packages(
        &self,
        params: ListParams,
    ) -> Result<Vec<RightsPackage>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let rows = rights_packages::table
            .filter(rights_packages::is_active.eq(true))
            .order(rights_packages::id.asc())
            .offset(params.offset())
            .limit(params.limit())
            .select(RightsPackage::as_select())
            .load(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn find_rights_package(
        &self,
        package_id: i32,
    ) -> Result<Option<RightsPackage>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let package = rights_packages::table
            .find(package_id)
            .select(RightsPackage::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(package)
    }

    pub async fn insert_rights_package(
        &self,
        new_package: &NewRightsPackage,
    ) -> Result<RightsPackage, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let package = diesel::insert_into(rights_packages::table)
            .values(new_package)
            .returning(RightsPackage::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(package)
    }
}
