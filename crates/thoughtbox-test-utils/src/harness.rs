// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness owning a throwaway storage backend.
//!
//! `TestHarness` creates a temp directory, points the chosen backend at it,
//! and initializes it. The directory is removed when the harness drops.

use std::sync::Arc;

use thoughtbox_config::{StorageBackend, StorageConfig};
use thoughtbox_core::{StorageAdapter, ThoughtboxError};
use thoughtbox_storage::open_storage;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    backend: StorageBackend,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            backend: StorageBackend::Memory,
        }
    }

    /// Selects the storage backend. Defaults to memory.
    pub fn with_backend(mut self, backend: StorageBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Creates the temp directory and opens the backend inside it.
    pub async fn build(self) -> Result<TestHarness, ThoughtboxError> {
        let temp_dir = tempfile::TempDir::new().map_err(ThoughtboxError::storage)?;
        let config = StorageConfig {
            backend: self.backend,
            database_path: temp_dir
                .path()
                .join("test.db")
                .to_string_lossy()
                .into_owned(),
            wal_mode: true,
            data_dir: temp_dir.path().join("kv").to_string_lossy().into_owned(),
        };
        let storage = open_storage(&config).await?;

        Ok(TestHarness {
            storage,
            config,
            _temp_dir: temp_dir,
        })
    }
}

/// An initialized storage backend in a temp directory.
pub struct TestHarness {
    /// The opened backend.
    pub storage: Arc<dyn StorageAdapter>,
    /// Configuration the backend was opened with.
    pub config: StorageConfig,
    /// Temp directory kept alive for cleanup on drop.
    _temp_dir: tempfile::TempDir,
}

impl TestHarness {
    /// Create a new builder for configuring the test harness.
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Opens a second handle on the same backing files, as a restarted
    /// process would. Memory backends start empty.
    pub async fn reopen(&self) -> Result<Arc<dyn StorageAdapter>, ThoughtboxError> {
        open_storage(&self.config).await
    }
}
