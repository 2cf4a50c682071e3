use crate::{DbError, Result};

use tapis_core::ErrorLocation;

use std::panic::Location;
use std::path::PathBuf;
use std::time::Duration;

use log::{debug, info};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

const FILE_MAX_CONNECTIONS: u32 = 10;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the SQLite pool backing the user, role and project stores and
/// brings its schema up to date.
pub struct ConnectionManager {
    target: Target,
}

enum Target {
    File(PathBuf),
    Memory,
}

impl ConnectionManager {
    /// Database stored in a file, created on first use
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            target: Target::File(path.into()),
        }
    }

    /// Private in-memory database (tests, throwaway runs)
    pub fn in_memory() -> Self {
        Self {
            target: Target::Memory,
        }
    }

    pub async fn connect(&self) -> Result<SqlitePool> {
        let pool = match &self.target {
            Target::File(path) => {
                if let Some(parent) = path.parent()
                    && !parent.as_os_str().is_empty()
                {
                    tokio::fs::create_dir_all(parent)
                        .await
                        .map_err(|e| DbError::Initialization {
                            message: format!(
                                "Failed to create database directory {}: {}",
                                parent.display(),
                                e
                            ),
                            location: ErrorLocation::from(Location::caller()),
                        })?;
                }

                info!("Opening database {}", path.display());

                let options = SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true)
                    .foreign_keys(true)
                    .journal_mode(SqliteJournalMode::Wal)
                    .synchronous(SqliteSynchronous::Normal)
                    .busy_timeout(BUSY_TIMEOUT);

                SqlitePoolOptions::new()
                    .max_connections(FILE_MAX_CONNECTIONS)
                    .connect_with(options)
                    .await?
            }
            Target::Memory => {
                let options = SqliteConnectOptions::new()
                    .filename(":memory:")
                    .foreign_keys(true);

                // Every connection to :memory: is its own database, so the
                // pool must keep exactly one alive for its whole lifetime.
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect_with(options)
                    .await?
            }
        };

        Self::run_migrations(&pool).await?;

        Ok(pool)
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!("Database migrations applied");

        Ok(())
    }
}
