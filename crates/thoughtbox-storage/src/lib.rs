// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key-value persistence backends for Thoughtbox.
//!
//! Every backend implements [`StorageAdapter`] with atomic per-key
//! overwrites: SQLite (single upsert statement on tokio-rusqlite's writer
//! thread), a directory of files (write temp file, then rename), and an
//! in-memory map for tests and throwaway sessions.

use std::sync::Arc;

use thoughtbox_config::{StorageBackend, StorageConfig};
use thoughtbox_core::{StorageAdapter, ThoughtboxError};
use tracing::info;

pub mod database;
pub mod file;
pub mod memory;
pub mod queries;
pub mod sqlite;

pub use database::Database;
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Builds the configured backend without initializing it.
pub fn build_storage(config: &StorageConfig) -> Arc<dyn StorageAdapter> {
    match config.backend {
        StorageBackend::Sqlite => Arc::new(SqliteStorage::new(config.clone())),
        StorageBackend::File => Arc::new(FileStorage::new(&config.data_dir)),
        StorageBackend::Memory => Arc::new(MemoryStorage::new()),
    }
}

/// Builds and initializes the configured backend.
pub async fn open_storage(
    config: &StorageConfig,
) -> Result<Arc<dyn StorageAdapter>, ThoughtboxError> {
    let storage = build_storage(config);
    storage.initialize().await?;
    info!(backend = %config.backend, "storage ready");
    Ok(storage)
}
