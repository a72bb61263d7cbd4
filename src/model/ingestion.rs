use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Fixtures,
    Rights,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Fixtures => "fixtures",
            JobType::Rights => "rights",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Running => "running",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Api,
    Rss,
    WebScraping,
    Manual,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Api => "api",
            SourceType::Rss => "rss",
            SourceType::WebScraping => "web_scraping",
            SourceType::Manual => "manual",
        }
    }
}

impl FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "api" => Ok(SourceType::Api),
            "rss" => Ok(SourceType::Rss),
            "web_scraping" => Ok(SourceType::WebScraping),
            "manual" => Ok(SourceType::Manual),
            other => Err(format!("unknown source type '{other}'")),
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// External feed that ingestion jobs pull from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::model::schema::data_sources)]
pub struct DataSource {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub source_type: String,
    pub base_url: Option<String>,
    pub auth_required: bool,
    pub is_active: bool,
    pub last_sync_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::model::schema::data_sources)]
pub struct NewDataSource {
    pub name: String,
    pub code: String,
    pub source_type: String,
    pub base_url: Option<String>,
    pub auth_required: bool,
}

impl DataSource {
    /// Unrecognised stored values are treated as manual sources.
    pub fn kind(&self) -> SourceType {
        self.source_type.parse().unwrap_or(SourceType::Manual)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::model::schema::ingestion_jobs)]
pub struct IngestionJob {
    pub id: i32,
    pub data_source_id: i32,
    pub job_type: String,
    pub status: String,
    pub records_processed: i32,
    pub records_inserted: i32,
    pub records_updated: i32,
    pub records_failed: i32,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub duration_seconds: Option<i32>,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A job row is born `running`; there is no separate pending insert.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::model::schema::ingestion_jobs)]
pub struct NewIngestionJob {
    pub data_source_id: i32,
    pub job_type: String,
    pub status: String,
    pub started_at: Option<DateTime<Utc>>,
}

impl NewIngestionJob {
    pub fn running(data_source_id: i32, job_type: JobType, started_at: DateTime<Utc>) -> Self {
        NewIngestionJob {
            data_source_id,
            job_type: job_type.as_str().to_string(),
            status: JobStatus::Running.as_str().to_string(),
            started_at: Some(started_at),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RecordCounts {
    pub processed: i32,
    pub inserted: i32,
    pub updated: i32,
    pub failed: i32,
}

/// Terminal state of a job, written in a single UPDATE.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = crate::model::schema::ingestion_jobs, treat_none_as_null = true)]
pub struct JobCompletion {
    pub status: String,
    pub records_processed: i32,
    pub records_inserted: i32,
    pub records_updated: i32,
    pub records_failed: i32,
    pub completed_at: Option<DateTime<Utc>>,
    pub duration_seconds: Option<i32>,
    pub error_message: Option<String>,
}

impl JobCompletion {
    pub fn new(
        status: JobStatus,
        counts: RecordCounts,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        error_message: Option<String>,
    ) -> Self {
        let duration = (completed_at - started_at).num_seconds().max(0);
        JobCompletion {
            status: status.as_str().to_string(),
            records_processed: counts.processed,
            records_inserted: counts.inserted,
            records_updated: counts.updated,
            records_failed: counts.failed,
            completed_at: Some(completed_at),
            duration_seconds: Some(i32::try_from(duration).unwrap_or(i32::MAX)),
            error_message,
        }
    }

    pub fn apply_to(&self, job: &mut IngestionJob) {
        job.status = self.status.clone();
        job.records_processed = self.records_processed;
        job.records_inserted = self.records_inserted;
        job.records_updated = self.records_updated;
        job.records_failed = self.records_failed;
        job.completed_at = self.completed_at;
        job.duration_seconds = self.duration_seconds;
        job.error_message = self.error_message.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn completion_records_duration_and_counts() {
        let started = Utc::now();
        let finished = started + Duration::seconds(42);
        let counts = RecordCounts {
            processed: 5,
            inserted: 3,
            updated: 1,
            failed: 1,
        };
        let completion = JobCompletion::new(JobStatus::Completed, counts, started, finished, None);

        assert_eq!(completion.status, "completed");
        assert_eq!(completion.duration_seconds, Some(42));
        assert_eq!(completion.records_failed, 1);
        assert_eq!(completion.completed_at, Some(finished));
    }

    #[test]
    fn source_kind_parses_stored_value() {
        let now = Utc::now();
        let source = DataSource {
            id: 1,
            name: "World Rugby".to_string(),
            code: "WORLD_RUGBY".to_string(),
            source_type: "API".to_string(),
            base_url: Some("https://api.worldrugby.org".to_string()),
            auth_required: true,
            is_active: true,
            last_sync_at: None,
            created_at: now,
            updated_at: now,
        };
        assert_eq!(source.kind(), SourceType::Api);
        let odd = DataSource {
            source_type: "carrier-pigeon".to_string(),
            ..source
        };
        assert_eq!(odd.kind(), SourceType::Manual);
    }

    #[test]
    fn new_job_starts_running() {
        let job = NewIngestionJob::running(2, JobType::Rights, Utc::now());
        assert_eq!(job.status, "running");
        assert_eq!(job.job_type, "rights");
        assert!(job.started_at.is_some());
    }
}
