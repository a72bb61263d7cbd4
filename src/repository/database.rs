use crate::config::config::Config;
use deadpool::managed::Object;
use diesel::{ConnectionError, ConnectionResult};
use diesel_async::{
    pooled_connection::{deadpool::Pool, deadpool::PoolError, AsyncDieselConnectionManager},
    AsyncConnection, AsyncPgConnection,
};
use log::error;
use openssl::ssl::{SslConnector, SslMethod};
use postgres_openssl::MakeTlsConnector;
use thiserror::Error;

pub type DBPool = deadpool::managed::Pool<AsyncDieselConnectionManager<AsyncPgConnection>>;
pub type DBConnection = Object<AsyncDieselConnectionManager<AsyncPgConnection>>;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("could not acquire a database connection: {0}")]
    Pool(#[from] PoolError),
}

pub struct Database {
    pool: DBPool,
}

impl Database {
    /// Connections are opened lazily on first use.
    pub fn new(config: &Config) -> Self {
        let ca_file = config.database_ca_file.clone();
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new_with_setup(
            config.database_url.clone(),
            move |url| Box::pin(Self::establish(url.to_string(), ca_file.clone())),
        );
        let pool = Pool::builder(manager)
            .build()
            .expect("Failed to create pool.");
        Database { pool }
    }

    async fn establish(
        database_url: String,
        ca_file: Option<String>,
    ) -> ConnectionResult<AsyncPgConnection> {
        let Some(ca_file) = ca_file else {
            return AsyncPgConnection::establish(&database_url).await;
        };

        let mut builder = SslConnector::builder(SslMethod::tls())
            .map_err(|e| ConnectionError::BadConnection(e.to_string()))?;
        builder
            .set_ca_file(&ca_file)
            .map_err(|e| ConnectionError::BadConnection(e.to_string()))?;
        let connector = MakeTlsConnector::new(builder.build());
        let (client, connection) = tokio_postgres::connect(&database_url, connector)
            .await
            .map_err(|e| ConnectionError::BadConnection(e.to_string()))?;
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("Postgres connection error: {e}");
            }
        });
        AsyncPgConnection::try_from(client).await
    }

    pub(crate) async fn get_db_conn(&self) -> Result<DBConnection, RepositoryError> {
        self.pool.get().await.map_err(|err| {
            error!(
                "An error occurred while acquiring a pooled connection. The error: {:?}",
                err
            );
            RepositoryError::Pool(err)
        })
    }
}
