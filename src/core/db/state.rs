use anyhow::Context;
use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tokio::fs as async_fs;

use std::path::{Path, PathBuf};

use crate::config::AppConfig;

/// Result of preparing the working database before the first read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InitOutcome {
    /// The seed was copied to the working path.
    Initialized,
    AlreadyExists,
    /// Neither working database nor seed exist; there is no data to show.
    SeedMissing,
}

/// Create the data directory and copy the seed database into place if the
/// working database is absent. Safe to call on every run.
pub async fn ensure_initialized(config: &AppConfig) -> anyhow::Result<InitOutcome> {
    async_fs::create_dir_all(&config.data_dir)
        .await
        .with_context(|| format!("Failed to create data directory {:?}", config.data_dir))?;

    if async_fs::try_exists(&config.db_path)
        .await
        .with_context(|| format!("Failed to stat database {:?}", config.db_path))?
    {
        tracing::debug!(db = ?config.db_path, "working database present");
        return Ok(InitOutcome::AlreadyExists);
    }

    if !async_fs::try_exists(&config.seed_path)
        .await
        .with_context(|| format!("Failed to stat seed {:?}", config.seed_path))?
    {
        tracing::info!(seed = ?config.seed_path, "no working database and no seed");
        return Ok(InitOutcome::SeedMissing);
    }

    async_fs::copy(&config.seed_path, &config.db_path)
        .await
        .with_context(|| {
            format!(
                "Failed to copy seed database from {:?} to {:?}",
                config.seed_path, config.db_path
            )
        })?;
    tracing::info!(
        seed = ?config.seed_path,
        db = ?config.db_path,
        "initialized database from seed"
    );
    Ok(InitOutcome::Initialized)
}

/// Read-only handle on the working database, held for one render.
pub(super) struct DashboardState {
    db_file: PathBuf,
    pool: SqlitePool,
}

impl std::fmt::Debug for DashboardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardState")
            .field("db_file", &self.db_file)
            .finish()
    }
}

impl DashboardState {
    pub(super) async fn open<P: AsRef<Path>>(db_file: P) -> anyhow::Result<Self> {
        let db_file = db_file.as_ref().to_path_buf();
        if !db_file.is_file() {
            anyhow::bail!("Database file does not exist: {:?}", db_file);
        }

        let connect_opts = SqliteConnectOptions::new()
            .filename(&db_file)
            .create_if_missing(false)
            .read_only(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(connect_opts)
            .await
            .with_context(|| format!("Failed to open database {:?}", db_file))?;
        tracing::debug!(db = ?db_file, "opened database read-only");

        Ok(Self { db_file, pool })
    }

    pub(super) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Release the file handle.
    pub(super) async fn close(self) {
        self.pool.close().await;
        tracing::debug!(db = ?self.db_file, "closed database");
    }
}
