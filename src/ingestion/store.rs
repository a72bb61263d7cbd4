use crate::model::fixture::{Fixture, NewFixture};
use crate::model::ingestion::{IngestionJob, JobCompletion, NewIngestionJob};
use crate::model::rights::{FixtureRights, NewFixtureRights};
use crate::model::team::Team;
use crate::model::territory::Territory;
use crate::repository::database::{Database, RepositoryError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Persistence used by ingestion runs.
#[async_trait]
pub trait IngestionStore: Send + Sync {
    async fn start_job(&self, job: &NewIngestionJob) -> Result<IngestionJob, RepositoryError>;

    async fn finish_job(
        &self,
        job_id: i32,
        completion: &JobCompletion,
    ) -> Result<IngestionJob, RepositoryError>;

    async fn mark_source_synced(
        &self,
        source_id: i32,
        synced_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError>;

    async fn active_teams(&self) -> Result<Vec<Team>, RepositoryError>;

    async fn fixture_by_external_id(
        &self,
        source: &str,
        external_id: &str,
    ) -> Result<Option<Fixture>, RepositoryError>;

    async fn create_fixture(&self, fixture: &NewFixture) -> Result<Fixture, RepositoryError>;

    async fn update_fixture(&self, fixture: &Fixture) -> Result<Fixture, RepositoryError>;

    async fn territory_by_code(&self, code: &str) -> Result<Option<Territory>, RepositoryError>;

    async fn rights_for_platform(
        &self,
        fixture_id: i32,
        territory_id: i32,
        platform_name: &str,
    ) -> Result<Option<FixtureRights>, RepositoryError>;

    async fn create_rights(&self, rights: &NewFixtureRights)
        -> Result<FixtureRights, RepositoryError>;

    async fn update_rights(&self, rights: &FixtureRights) -> Result<FixtureRights, RepositoryError>;
}

#[async_trait]
impl IngestionStore for Database {
    async fn start_job(&self, job: &NewIngestionJob) -> Result<IngestionJob, RepositoryError> {
        self.insert_ingestion_job(job).await
    }

    async fn finish_job(
        &self,
        job_id: i32,
        completion: &JobCompletion,
    ) -> Result<IngestionJob, RepositoryError> {
        self.complete_ingestion_job(job_id, completion).await
    }

    async fn mark_source_synced(
        &self,
        source_id: i32,
        synced_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        self.touch_data_source_sync(source_id, synced_at).await
    }

    async fn active_teams(&self) -> Result<Vec<Team>, RepositoryError> {
        self.all_active_teams().await
    }

    async fn fixture_by_external_id(
        &self,
        source: &str,
        external_id: &str,
    ) -> Result<Option<Fixture>, RepositoryError> {
        self.find_fixture_by_external_id(source, external_id).await
    }

    async fn create_fixture(&self, fixture: &NewFixture) -> Result<Fixture, RepositoryError> {
        self.insert_fixture(fixture).await
    }

    async fn update_fixture(&self, fixture: &Fixture) -> Result<Fixture, RepositoryError> {
        self.save_fixture(fixture).await
    }

    async fn territory_by_code(&self, code: &str) -> Result<Option<Territory>, RepositoryError> {
        self.find_territory_by_code(code).await
    }

    async fn rights_for_platform(
        &self,
        fixture_id: i32,
        territory_id: i32,
        platform_name: &str,
    ) -> Result<Option<FixtureRights>, RepositoryError> {
        self.find_fixture_rights_for_platform(fixture_id, territory_id, platform_name)
            .await
    }

    async fn create_rights(
        &self,
        rights: &NewFixtureRights,
    ) -> Result<FixtureRights, RepositoryError> {
        self.insert_fixture_rights(rights).await
    }

    async fn update_rights(&self, rights: &FixtureRights) -> Result<FixtureRights, RepositoryError> {
        self.save_fixture_rights(rights).await
    }
}
