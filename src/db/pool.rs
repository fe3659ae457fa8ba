// Database connection management

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;

use crate::config::ApiConfig;
use crate::db::error::DbError;
use crate::db::repositories::Repositories;

/// Connection handle for the SQLite-backed store
pub struct DbPool {
    pool: DatabaseConnection,
}

impl DbPool {
    /// Opens the database from API configuration
    pub async fn new(config: &ApiConfig) -> Result<Self, DbError> {
        // Every connection to sqlite::memory: opens a separate empty
        // database, so the pool is pinned to one shared connection. The
        // store lives inside that connection: idle reaping or lifetime
        // recycling would silently replace it with an empty database, so
        // both are pushed out of reach.
        let one_year = Duration::from_secs(365 * 24 * 60 * 60);
        let conn_opts = ConnectOptions::new(config.database_url.clone())
            .max_connections(1)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(one_year)
            .max_lifetime(one_year)
            .sqlx_logging(false)
            .to_owned();

        Database::connect(conn_opts)
            .await
            .map(|pool| DbPool { pool })
            .map_err(|e| DbError::ConnectionError(e.to_string()))
    }

    /// Returns a reference to the underlying database connection
    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.pool
    }

    /// Creates repository instances for database operations
    pub fn repositories(&self) -> Repositories {
        Repositories::new(self.pool.clone())
    }
}
