use crate::ingestion::fetcher::SourceFetcher;
use crate::ingestion::id_mapping::{EntityType, IdMapper};
use crate::ingestion::sources::SourceConfig;
use crate::ingestion::store::IngestionStore;
use crate::ingestion::IngestionError;
use crate::model::fixture::{FixtureStatus, NewFixture, UpdateFixture};
use crate::model::ingestion::{IngestionJob, JobCompletion, JobStatus, JobType, NewIngestionJob, RecordCounts};
use crate::model::rights::NewFixtureRights;
use crate::model::team::Team;
use crate::repository::database::RepositoryError;
use crate::util::text_normalization::{fuzzy_match, normalize_team_name};
use chrono::{DateTime, Utc};
use log::{error, info, warn};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub const TEAM_MATCH_THRESHOLD: f64 = 0.85;

#[derive(Debug, Deserialize)]
pub struct RawFixture {
    pub external_id: String,
    pub home_team: String,
    pub away_team: String,
    pub season_id: i32,
    pub match_date: DateTime<Utc>,
    pub venue_id: Option<i32>,
    pub round: Option<String>,
    pub status: Option<String>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct RawRights {
    pub fixture_external_id: String,
    pub territory_code: String,
    pub rights_package_id: Option<i32>,
    pub platform_name: String,
    pub platform_url: Option<String>,
    pub is_live: Option<bool>,
    pub is_on_demand: Option<bool>,
    pub is_free: Option<bool>,
    pub requires_subscription: Option<bool>,
}

/// Why a single record was skipped. Only a lost connection pool fails the job.
#[derive(Debug, Error)]
enum RecordError {
    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid fixture status '{0}'")]
    InvalidStatus(String),
    #[error("no team matches '{0}'")]
    UnknownTeam(String),
    #[error("no fixture with external id '{0}'")]
    UnknownFixture(String),
    #[error("no territory with code '{0}'")]
    UnknownTerritory(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

enum Upsert {
    Inserted,
    Updated,
}

/// Active teams, matched in order.
struct TeamIndex {
    ids: Vec<i32>,
    names: Vec<String>,
    normalized: Vec<String>,
}

impl TeamIndex {
    fn new(teams: &[Team]) -> Self {
        TeamIndex {
            ids: teams.iter().map(|t| t.id).collect(),
            names: teams.iter().map(|t| t.name.clone()).collect(),
            normalized: teams.iter().map(|t| normalize_team_name(&t.name)).collect(),
        }
    }

    /// Exact normalized match first, then the best fuzzy match.
    fn find(&self, name: &str) -> Option<i32> {
        let wanted = normalize_team_name(name);
        if wanted.is_empty() {
            return None;
        }
        if let Some(pos) = self.normalized.iter().position(|n| *n == wanted) {
            return Some(self.ids[pos]);
        }
        fuzzy_match(name, &self.names, TEAM_MATCH_THRESHOLD)
            .first()
            .map(|m| self.ids[m.index])
    }
}

pub struct Ingestor<'a, S: IngestionStore + ?Sized, F: SourceFetcher + ?Sized> {
    store: &'a S,
    fetcher: &'a F,
}

impl<'a, S: IngestionStore + ?Sized, F: SourceFetcher + ?Sized> Ingestor<'a, S, F> {
    pub fn new(store: &'a S, fetcher: &'a F) -> Self {
        Ingestor { store, fetcher }
    }

    pub async fn run(
        &self,
        source: &SourceConfig,
        job_type: JobType,
    ) -> Result<IngestionJob, IngestionError> {
        match job_type {
            JobType::Fixtures => self.ingest_fixtures(source).await,
            JobType::Rights => self.ingest_rights(source).await,
        }
    }

    pub async fn ingest_fixtures(&self, source: &SourceConfig) -> Result<IngestionJob, IngestionError> {
        info!(
            "Starting fixture ingestion from source: {} ({})",
            source.name, source.code
        );
        let source_id = Self::stored_id(source)?;
        let started_at = Utc::now();
        let job = self
            .store
            .start_job(&NewIngestionJob::running(source_id, JobType::Fixtures, started_at))
            .await?;

        let mut counts = RecordCounts::default();
        let outcome = self.process_fixtures(source, &mut counts).await;
        self.finish(job, source_id, started_at, counts, outcome).await
    }

    pub async fn ingest_rights(&self, source: &SourceConfig) -> Result<IngestionJob, IngestionError> {
        info!(
            "Starting rights ingestion from source: {} ({})",
            source.name, source.code
        );
        let source_id = Self::stored_id(source)?;
        let started_at = Utc::now();
        let job = self
            .store
            .start_job(&NewIngestionJob::running(source_id, JobType::Rights, started_at))
            .await?;

        let mut counts = RecordCounts::default();
        let outcome = self.process_rights(source, &mut counts).await;
        self.finish(job, source_id, started_at, counts, outcome).await
    }

    fn stored_id(source: &SourceConfig) -> Result<i32, IngestionError> {
        source
            .id
            .ok_or_else(|| IngestionError::UnregisteredSource(source.code.clone()))
    }

    async fn finish(
        &self,
        job: IngestionJob,
        source_id: i32,
        started_at: DateTime<Utc>,
        counts: RecordCounts,
        outcome: Result<(), IngestionError>,
    ) -> Result<IngestionJob, IngestionError> {
        let completed_at = Utc::now();
        match outcome {
            Ok(()) => {
                let completion =
                    JobCompletion::new(JobStatus::Completed, counts, started_at, completed_at, None);
                let job = self.store.finish_job(job.id, &completion).await?;
                if let Err(err) = self.store.mark_source_synced(source_id, completed_at).await {
                    warn!("Could not refresh last sync time for source {}: {}", source_id, err);
                }
                info!("{} ingestion job {} completed: {:?}", job.job_type, job.id, counts);
                Ok(job)
            }
            Err(err) => {
                error!("{} ingestion job {} failed: {}", job.job_type, job.id, err);
                let completion = JobCompletion::new(
                    JobStatus::Failed,
                    counts,
                    started_at,
                    completed_at,
                    Some(err.to_string()),
                );
                if let Err(finish_err) = self.store.finish_job(job.id, &completion).await {
                    error!(
                        "An error occurred while marking ingestion job {} as failed. The error: {:?}",
                        job.id, finish_err
                    );
                }
                Err(err)
            }
        }
    }

    async fn process_fixtures(
        &self,
        source: &SourceConfig,
        counts: &mut RecordCounts,
    ) -> Result<(), IngestionError> {
        let records = self.fetcher.fetch_fixtures(source).await?;
        let teams = TeamIndex::new(&self.store.active_teams().await?);
        let mut ids = IdMapper::new();

        for record in records {
            counts.processed += 1;
            match self.upsert_fixture(source, record, &teams, &mut ids).await {
                Ok(Upsert::Inserted) => counts.inserted += 1,
                Ok(Upsert::Updated) => counts.updated += 1,
                Err(RecordError::Repository(err @ RepositoryError::Pool(_))) => return Err(err.into()),
                Err(err) => {
                    warn!("Failed to process fixture from {}: {}", source.code, err);
                    counts.failed += 1;
                }
            }
        }
        Ok(())
    }

    fn resolve_team(
        source: &SourceConfig,
        name: &str,
        teams: &TeamIndex,
        ids: &mut IdMapper,
    ) -> Result<i32, RecordError> {
        if let Some(team_id) = ids.get(EntityType::Team, &source.code, name) {
            return Ok(team_id);
        }
        let team_id = teams
            .find(name)
            .ok_or_else(|| RecordError::UnknownTeam(name.to_string()))?;
        ids.insert(EntityType::Team, &source.code, name, team_id);
        Ok(team_id)
    }

    async fn upsert_fixture(
        &self,
        source: &SourceConfig,
        record: Value,
        teams: &TeamIndex,
        ids: &mut IdMapper,
    ) -> Result<Upsert, RecordError> {
        let raw: RawFixture = serde_json::from_value(record)?;
        let status = match raw.status.as_deref() {
            Some(status) => Some(
                status
                    .parse::<FixtureStatus>()
                    .map_err(|_| RecordError::InvalidStatus(status.to_string()))?,
            ),
            None => None,
        };
        let home_team_id = Self::resolve_team(source, &raw.home_team, teams, ids)?;
        let away_team_id = Self::resolve_team(source, &raw.away_team, teams, ids)?;

        match self
            .store
            .fixture_by_external_id(&source.code, &raw.external_id)
            .await?
        {
            Some(mut fixture) => {
                UpdateFixture {
                    season_id: Some(raw.season_id),
                    home_team_id: Some(home_team_id),
                    away_team_id: Some(away_team_id),
                    venue_id: raw.venue_id,
                    match_date: Some(raw.match_date),
                    round: raw.round,
                    status: status.map(|s| s.as_str().to_string()),
                    home_score: raw.home_score,
                    away_score: raw.away_score,
                    ..Default::default()
                }
                .merge_into(&mut fixture);
                fixture.updated_at = Utc::now();
                let fixture = self.store.update_fixture(&fixture).await?;
                ids.insert(EntityType::Fixture, &source.code, &raw.external_id, fixture.id);
                Ok(Upsert::Updated)
            }
            None => {
                let fixture = self
                    .store
                    .create_fixture(&NewFixture {
                        season_id: raw.season_id,
                        home_team_id,
                        away_team_id,
                        venue_id: raw.venue_id,
                        match_date: raw.match_date,
                        round: raw.round,
                        status: status.unwrap_or(FixtureStatus::Scheduled).as_str().to_string(),
                        home_score: raw.home_score,
                        away_score: raw.away_score,
                        external_id: Some(raw.external_id.clone()),
                        source: Some(source.code.clone()),
                        notes: None,
                        is_active: true,
                    })
                    .await?;
                ids.insert(EntityType::Fixture, &source.code, &raw.external_id, fixture.id);
                Ok(Upsert::Inserted)
            }
        }
    }

    async fn process_rights(
        &self,
        source: &SourceConfig,
        counts: &mut RecordCounts,
    ) -> Result<(), IngestionError> {
        let records = self.fetcher.fetch_rights(source).await?;
        let mut ids = IdMapper::new();

        for record in records {
            counts.processed += 1;
            match self.upsert_rights(source, record, &mut ids).await {
                Ok(Upsert::Inserted) => counts.inserted += 1,
                Ok(Upsert::Updated) => counts.updated += 1,
                Err(RecordError::Repository(err @ RepositoryError::Pool(_))) => return Err(err.into()),
                Err(err) => {
                    warn!("Failed to process rights entry from {}: {}", source.code, err);
                    counts.failed += 1;
                }
            }
        }
        Ok(())
    }

    async fn lookup_fixture(
        &self,
        source: &SourceConfig,
        external_id: &str,
        ids: &mut IdMapper,
    ) -> Result<i32, RecordError> {
        if let Some(fixture_id) = ids.get(EntityType::Fixture, &source.code, external_id) {
            return Ok(fixture_id);
        }
        let fixture = self
            .store
            .fixture_by_external_id(&source.code, external_id)
            .await?
            .ok_or_else(|| RecordError::UnknownFixture(external_id.to_string()))?;
        ids.insert(EntityType::Fixture, &source.code, external_id, fixture.id);
        Ok(fixture.id)
    }

    async fn lookup_territory(
        &self,
        source: &SourceConfig,
        code: &str,
        ids: &mut IdMapper,
    ) -> Result<i32, RecordError> {
        let code = code.trim().to_ascii_uppercase();
        if let Some(territory_id) = ids.get(EntityType::Territory, &source.code, &code) {
            return Ok(territory_id);
        }
        let territory = self
            .store
            .territory_by_code(&code)
            .await?
            .ok_or_else(|| RecordError::UnknownTerritory(code.clone()))?;
        ids.insert(EntityType::Territory, &source.code, &code, territory.id);
        Ok(territory.id)
    }

    async fn upsert_rights(
        &self,
        source: &SourceConfig,
        record: Value,
        ids: &mut IdMapper,
    ) -> Result<Upsert, RecordError> {
        let raw: RawRights = serde_json::from_value(record)?;
        let fixture_id = self.lookup_fixture(source, &raw.fixture_external_id, ids).await?;
        let territory_id = self.lookup_territory(source, &raw.territory_code, ids).await?;
        let now = Utc::now();

        match self
            .store
            .rights_for_platform(fixture_id, territory_id, &raw.platform_name)
            .await?
        {
            Some(mut rights) => {
                if raw.rights_package_id.is_some() {
                    rights.rights_package_id = raw.rights_package_id;
                }
                if raw.platform_url.is_some() {
                    rights.platform_url = raw.platform_url;
                }
                rights.is_live = raw.is_live.unwrap_or(rights.is_live);
                rights.is_on_demand = raw.is_on_demand.unwrap_or(rights.is_on_demand);
                rights.is_free = raw.is_free.unwrap_or(rights.is_free);
                rights.requires_subscription = raw
                    .requires_subscription
                    .unwrap_or(rights.requires_subscription);
                rights.verified_at = Some(now);
                rights.updated_at = now;
                self.store.update_rights(&rights).await?;
                Ok(Upsert::Updated)
            }
            None => {
                self.store
                    .create_rights(&NewFixtureRights {
                        fixture_id,
                        territory_id,
                        rights_package_id: raw.rights_package_id,
                        platform_name: Some(raw.platform_name),
                        platform_url: raw.platform_url,
                        is_live: raw.is_live.unwrap_or(true),
                        is_on_demand: raw.is_on_demand.unwrap_or(false),
                        is_free: raw.is_free.unwrap_or(false),
                        requires_subscription: raw.requires_subscription.unwrap_or(true),
                        verified_at: Some(now),
                        is_active: true,
                    })
                    .await?;
                Ok(Upsert::Inserted)
            }
        }
    }
}
