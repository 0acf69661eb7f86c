// SQLite Connection Pool Setup

use brewlog_core::error::{AppError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Create the SQLite connection pool with WAL mode and foreign keys
/// enforced on every pooled connection.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    // sqlx accepts any non-sqlite URL as a literal filename; catch the
    // mix-up here instead of failing at connect time
    if let Some((scheme, _)) = database_url.split_once("://") {
        if scheme != "sqlite" {
            return Err(AppError::Config(format!(
                "unsupported database url scheme {:?} (expected sqlite or a file path)",
                scheme
            )));
        }
    }

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| AppError::Config(format!("invalid database url {:?}: {}", database_url, e)))?
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(pool)
}

/// Drain and close the pool. Safe to call more than once.
pub async fn close_pool(pool: &SqlitePool) {
    pool.close().await;
}
