// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key-value reads and upserts.

use rusqlite::{OptionalExtension, params};
use thoughtbox_core::ThoughtboxError;

use crate::database::{Database, map_tr_err};

/// Read the value stored under `key`.
pub async fn get_value(db: &Database, key: &str) -> Result<Option<String>, ThoughtboxError> {
    let key = key.to_string();
    db.connection()
        .call(move |conn| -> Result<Option<String>, rusqlite::Error> {
            conn.query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
        })
        .await
        .map_err(map_tr_err)
}

/// Insert or replace the value stored under `key` in a single statement.
pub async fn set_value(db: &Database, key: &str, value: String) -> Result<(), ThoughtboxError> {
    let key = key.to_string();
    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            conn.execute(
                "INSERT INTO kv (key, value, updated_at)
                 VALUES (?1, ?2, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
                 ON CONFLICT(key) DO UPDATE
                 SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Number of keys present. Used by health checks and tests.
pub async fn count_keys(db: &Database) -> Result<i64, ThoughtboxError> {
    db.connection()
        .call(|conn| -> Result<i64, rusqlite::Error> {
            conn.query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))
        })
        .await
        .map_err(map_tr_err)
}
