// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All writes are serialized through tokio-rusqlite's single background
//! thread. The `Database` struct IS the single writer; query modules
//! accept `&Database` and call through `connection().call()`. Do NOT
//! create additional Connection instances for writes.

use std::path::Path;

use strategist_config::model::StorageConfig;
use strategist_core::StrategistError;
use tracing::debug;

use crate::migrations;

/// Handle to the SQLite database behind the single writer thread.
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Open (or create) the database at `path` with WAL mode enabled and
    /// all pending migrations applied.
    pub async fn open(path: &str) -> Result<Self, StrategistError> {
        Self::open_with(path, true).await
    }

    /// Open using the configured path and WAL setting.
    pub async fn from_config(config: &StorageConfig) -> Result<Self, StrategistError> {
        Self::open_with(&config.database_path, config.wal_mode).await
    }

    async fn open_with(path: &str, wal_mode: bool) -> Result<Self, StrategistError> {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| StrategistError::Storage {
                source: Box::new(e),
            })?;
        }

        // Migrations run on a short-lived blocking connection before the
        // writer thread starts; refinery tracks applied migrations in its
        // own refinery_schema_history table.
        let migrate_path = path.to_string();
        tokio::task::spawn_blocking(move || -> Result<(), StrategistError> {
            let mut conn =
                rusqlite::Connection::open(&migrate_path).map_err(|e| StrategistError::Storage {
                    source: Box::new(e),
                })?;
            migrations::run_migrations(&mut conn)
        })
        .await
        .map_err(|e| StrategistError::Internal(format!("migration task panicked: {e}")))??;

        let conn = tokio_rusqlite::Connection::open(path)
            .await
            .map_err(|e| map_tr_err(e.into()))?;

        let journal_mode = if wal_mode { "WAL" } else { "DELETE" };
        let pragmas = format!(
            "PRAGMA journal_mode = {journal_mode};\n\
             PRAGMA synchronous = NORMAL;\n\
             PRAGMA busy_timeout = 5000;"
        );
        conn.call(move |conn| {
            conn.execute_batch(&pragmas)?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;

        debug!(path, wal_mode, "database opened");
        Ok(Self { conn })
    }

    /// Returns the underlying tokio-rusqlite connection.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Checkpoint the WAL before the handle is dropped.
    pub async fn close(&self) -> Result<(), StrategistError> {
        self.conn
            .call(|conn| {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        debug!("WAL checkpoint complete");
        Ok(())
    }
}

/// Map a tokio-rusqlite error into the storage error variant.
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error) -> StrategistError {
    StrategistError::Storage {
        source: Box::new(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn open_creates_database_file() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("open_test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        assert!(db_path.exists(), "database file should be created");
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn open_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("nested/dirs/strategist.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        assert!(db_path.exists());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn migrations_are_idempotent_across_reopens() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("reopen.db");
        let path = db_path.to_str().unwrap();

        let db = Database::open(path).await.unwrap();
        db.close().await.unwrap();
        drop(db);

        // Second open must not fail re-applying V1.
        let db = Database::open(path).await.unwrap();
        let count: i64 = db
            .connection()
            .call(|conn| {
                let n = conn.query_row("SELECT COUNT(*) FROM platforms", [], |row| row.get(0))?;
                Ok::<_, rusqlite::Error>(n)
            })
            .await
            .unwrap();
        assert_eq!(count, 0);
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn from_config_honors_database_path() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("configured.db");
        let config = StorageConfig {
            database_path: db_path.to_str().unwrap().to_string(),
            wal_mode: false,
        };
        let db = Database::from_config(&config).await.unwrap();
        assert!(db_path.exists());
        db.close().await.unwrap();
    }
}
