//! Startup bootstrap for the SQLite store.
//!
//! `/analyze` never reads or writes the database; this step only makes sure
//! the `ideas` table exists so a later version can start persisting
//! analyses. Failures degrade the process instead of stopping it.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use tracing::info;

use crate::config::Config;

/// Schema used when no schema file is found at the configured path.
const DEFAULT_SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS ideas (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    idea_text TEXT NOT NULL,
    swot_analysis TEXT,
    market_fit TEXT,
    competitor_overview TEXT,
    refinement_suggestions TEXT,
    timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
);";

/// Declared outcome of the bootstrap step. `Degraded` leaves the server
/// running without persistence.
#[derive(Debug)]
pub enum DbInit {
    Initialized,
    Degraded(String),
}

pub async fn init(config: &Config) -> DbInit {
    match try_init(&config.database_path, &config.schema_path).await {
        Ok(()) => DbInit::Initialized,
        Err(e) => DbInit::Degraded(e.to_string()),
    }
}

async fn try_init(database_path: &Path, schema_path: &Path) -> Result<(), sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;

    apply_schema(&pool, schema_path).await?;

    pool.close().await;
    Ok(())
}

async fn apply_schema(pool: &SqlitePool, schema_path: &Path) -> Result<(), sqlx::Error> {
    match std::fs::read_to_string(schema_path) {
        Ok(schema) => {
            sqlx::raw_sql(&schema).execute(pool).await?;
            info!(schema = %schema_path.display(), "Database initialized from schema file");
        }
        Err(_) => {
            sqlx::raw_sql(DEFAULT_SCHEMA).execute(pool).await?;
            info!("Database initialized with the default 'ideas' table");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    // File-backed databases: a `:memory:` pool would hand every pooled
    // connection its own private database.
    async fn pool_in(dir: &TempDir) -> SqlitePool {
        let options = SqliteConnectOptions::new()
            .filename(dir.path().join("test.db"))
            .create_if_missing(true);
        SqlitePool::connect_with(options).await.unwrap()
    }

    async fn table_exists(pool: &SqlitePool, name: &str) -> bool {
        sqlx::query("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?")
            .bind(name)
            .fetch_optional(pool)
            .await
            .unwrap()
            .is_some()
    }

    #[tokio::test]
    async fn missing_schema_file_falls_back_to_builtin_ideas_table() {
        let dir = tempfile::tempdir().unwrap();
        let pool = pool_in(&dir).await;

        apply_schema(&pool, Path::new("does-not-exist.sql"))
            .await
            .unwrap();

        assert!(table_exists(&pool, "ideas").await);
    }

    #[tokio::test]
    async fn schema_file_takes_precedence_over_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let pool = pool_in(&dir).await;

        let mut schema_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            schema_file,
            "CREATE TABLE IF NOT EXISTS custom_ideas (id INTEGER PRIMARY KEY);"
        )
        .unwrap();

        apply_schema(&pool, schema_file.path()).await.unwrap();

        assert!(table_exists(&pool, "custom_ideas").await);
        assert!(!table_exists(&pool, "ideas").await);
    }

    #[tokio::test]
    async fn init_reports_degraded_on_unopenable_database() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            server_addr: "127.0.0.1:0".parse().unwrap(),
            ai_api_key: None,
            ai_model: "gemini-pro".to_string(),
            // A directory is not a valid database file.
            database_path: dir.path().to_path_buf(),
            schema_path: "does-not-exist.sql".into(),
        };

        match init(&config).await {
            DbInit::Degraded(reason) => assert!(!reason.is_empty()),
            DbInit::Initialized => panic!("expected degraded init"),
        }
    }

    #[tokio::test]
    async fn init_creates_database_file_and_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            server_addr: "127.0.0.1:0".parse().unwrap(),
            ai_api_key: None,
            ai_model: "gemini-pro".to_string(),
            database_path: dir.path().join("ideas.db"),
            schema_path: "does-not-exist.sql".into(),
        };

        match init(&config).await {
            DbInit::Initialized => {}
            DbInit::Degraded(reason) => panic!("expected successful init, got: {}", reason),
        }
        assert!(config.database_path.exists());
    }
}
