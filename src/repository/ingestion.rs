use crate::model::ingestion::{DataSource, IngestionJob, JobCompletion, NewDataSource, NewIngestionJob};
use crate::model::schema::{data_sources, ingestion_jobs};
use crate::repository::database::{Database, RepositoryError};
use chrono::{DateTime, Utc};
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;

impl Database {
    pub async fn list_data_sources(&self) -> Result<Vec<DataSource>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let rows = data_sources::table
            .order(data_sources::id.asc())
            .select(DataSource::as_select())
            .load(&mut conn)
            .await?;
        Ok(rows)
    }

    pub async fn find_data_source_by_code(
        &self,
        source_code: &str,
    ) -> Result<Option<DataSource>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let source = data_sources::table
            .filter(data_sources::code.eq(source_code))
            .select(DataSource::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(source)
    }

    /// Inserts the source unless its code is already stored, then reads it back.
    pub async fn ensure_data_source(
        &self,
        new_source: &NewDataSource,
    ) -> Result<DataSource, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        diesel::insert_into(data_sources::table)
            .values(new_source)
            .on_conflict(data_sources::code)
            .do_nothing()
            .execute(&mut conn)
            .await?;
        let source = data_sources::table
            .filter(data_sources::code.eq(&new_source.code))
            .select(DataSource::as_select())
            .first(&mut conn)
            .await?;
        Ok(source)
    }

    pub async fn touch_data_source_sync(
        &self,
        source_id: i32,
        synced_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        diesel::update(data_sources::table.find(source_id))
            .set((
                data_sources::last_sync_at.eq(Some(synced_at)),
                data_sources::updated_at.eq(synced_at),
            ))
            .execute(&mut conn)
            .await?;
        Ok(())
    }

    pub async fn insert_ingestion_job(
        &self,
        new_job: &NewIngestionJob,
    ) -> Result<IngestionJob, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let job = diesel::insert_into(ingestion_jobs::table)
            .values(new_job)
            .returning(IngestionJob::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(job)
    }

    pub async fn complete_ingestion_job(
        &self,
        job_id: i32,
        completion: &JobCompletion,
    ) -> Result<IngestionJob, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let job = diesel::update(ingestion_jobs::table.find(job_id))
            .set(completion)
            .returning(IngestionJob::as_returning())
            .get_result(&mut conn)
            .await?;
        Ok(job)
    }

    pub async fn find_ingestion_job(
        &self,
        job_id: i32,
    ) -> Result<Option<IngestionJob>, RepositoryError> {
        let mut conn = self.get_db_conn().await?;
        let job = ingestion_jobs::table
            .find(job_id)
            .select(IngestionJob::as_select())
            .first(&mut conn)
            .await
            .optional()?;
        Ok(job)
    }
}
