// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite connection management: PRAGMA setup, schema, and error mapping.
//!
//! All statements run on tokio-rusqlite's single background thread, so
//! writes through one [`Database`] are serialized by the connection itself.

use std::path::Path;
use std::time::Duration;

use thoughtbox_core::ThoughtboxError;
use tracing::debug;

/// Schema for the key-value table. Idempotent.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS kv (
    key        TEXT PRIMARY KEY NOT NULL,
    value      TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);
";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Converts tokio-rusqlite errors into [`ThoughtboxError::Storage`].
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error) -> ThoughtboxError {
    ThoughtboxError::Storage {
        source: Box::new(e),
    }
}

/// An open SQLite database holding the `kv` table.
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Opens (creating if needed) the database at `path` and applies the schema.
    pub async fn open(path: &str, wal_mode: bool) -> Result<Self, ThoughtboxError> {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(ThoughtboxError::storage)?;
        }

        let conn = tokio_rusqlite::Connection::open(path)
            .await
            .map_err(|e| ThoughtboxError::Storage {
                source: Box::new(e),
            })?;

        conn.call(move |conn| -> Result<(), rusqlite::Error> {
            if wal_mode {
                let mode: String =
                    conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
                debug!(journal_mode = %mode, "journal mode set");
            }
            conn.pragma_update(None, "synchronous", "NORMAL")?;
            conn.busy_timeout(BUSY_TIMEOUT)?;
            conn.execute_batch(SCHEMA)?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;

        debug!(path, wal_mode, "database opened");
        Ok(Self { conn })
    }

    /// The underlying connection handle.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Folds the WAL back into the main database file.
    pub async fn checkpoint(&self) -> Result<(), ThoughtboxError> {
        self.conn
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.query_row("PRAGMA wal_checkpoint(TRUNCATE)", [], |_| Ok(()))
            })
            .await
            .map_err(map_tr_err)
    }
}
