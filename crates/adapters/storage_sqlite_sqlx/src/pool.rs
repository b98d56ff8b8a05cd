//! `SQLite` connection pool setup and migration runner.

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::StorageError;
use crate::{SqliteProjectRepository, SqliteTaskRepository};

const MAX_CONNECTIONS: u32 = 8;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for the `SQLite` storage adapter.
#[derive(Debug, Clone)]
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:taskboard.db` or `sqlite::memory:`).
    pub database_url: String,
}

impl Config {
    /// Open the pool, creating the database file if missing, and bring the
    /// schema up to date.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the URL is invalid, the connection fails
    /// or a migration fails.
    pub async fn build(self) -> Result<Database, StorageError> {
        let options = SqliteConnectOptions::from_str(&self.database_url)?
            .create_if_missing(true)
            .busy_timeout(BUSY_TIMEOUT);

        tracing::debug!(url = %self.database_url, "opening sqlite database");
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        Database::migrate(pool).await
    }
}

/// An open, migrated `SQLite` database.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    async fn migrate(pool: SqlitePool) -> Result<Self, StorageError> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!("sqlite schema is up to date");
        Ok(Self { pool })
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Repository over the `projects` table.
    #[must_use]
    pub fn project_repository(&self) -> SqliteProjectRepository {
        SqliteProjectRepository::new(self.pool.clone())
    }

    /// Repository over the `tasks` table.
    #[must_use]
    pub fn task_repository(&self) -> SqliteTaskRepository {
        SqliteTaskRepository::new(self.pool.clone())
    }
}
