use crate::model::fixture::Fixture;
use crate::model::rights::{FixtureRights, RightsPackage};
use crate::model::territory::Territory;
use crate::repository::database::{Database, RepositoryError};
use async_trait::async_trait;

/// Reads the resolution engine needs from persistence.
#[async_trait]
pub trait RightsStore: Send + Sync {
    async fn load_fixture(&self, fixture_id: i32) -> Result<Option<Fixture>, RepositoryError>;

    async fn load_territory(&self, territory_id: i32)
        -> Result<Option<Territory>, RepositoryError>;

    /// Active rows only, ordered by ascending id.
    async fn load_active_rights(
        &self,
        fixture_id: i32,
        territory_id: i32,
    ) -> Result<Vec<FixtureRights>, RepositoryError>;

    async fn load_packages(&self, package_ids: &[i32])
        -> Result<Vec<RightsPackage>, RepositoryError>;
}

#[async_trait]
impl RightsStore for Database {
    async fn load_fixture(&self, fixture_id: i32) -> Result<Option<Fixture>, RepositoryError> {
        self.find_fixture(fixture_id).await
    }

    async fn load_territory(
        &self,
        territory_id: i32,
    ) -> Result<Option<Territory>, RepositoryError> {
        self.find_territory(territory_id).await
    }

    async fn load_active_rights(
        &self,
        fixture_id: i32,
        territory_id: i32,
    ) -> Result<Vec<FixtureRights>, RepositoryError> {
        self.active_rights(fixture_id, territory_id).await
    }

    async fn load_packages(
        &self,
        package_ids: &[i32],
    ) -> Result<Vec<RightsPackage>, RepositoryError> {
        self.rights_packages_by_ids(package_ids).await
    }
}
