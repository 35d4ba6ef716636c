// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Directory-backed key-value storage: one `<key>.json` file per key.
//!
//! Writes land in a uniquely named temporary file that is synced and then
//! renamed over the target, so a reader sees either the old value or the new
//! one. A failed write leaves the previous file untouched.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use thoughtbox_core::{AdapterType, HealthStatus, PluginAdapter, StorageAdapter, ThoughtboxError};

/// Key-value storage rooted at a directory.
pub struct FileStorage {
    dir: PathBuf,
    initialized: AtomicBool,
    tmp_counter: AtomicU64,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            initialized: AtomicBool::new(false),
            tmp_counter: AtomicU64::new(0),
        }
    }

    fn ensure_initialized(&self) -> Result<(), ThoughtboxError> {
        if self.initialized.load(Ordering::Acquire) {
            Ok(())
        } else {
            Err(ThoughtboxError::Storage {
                source: "storage not initialized -- call initialize() first".into(),
            })
        }
    }

    /// Path for `key`. Keys are restricted so they cannot escape the directory.
    fn key_path(&self, key: &str) -> Result<PathBuf, ThoughtboxError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ThoughtboxError::Storage {
                source: format!("invalid storage key `{key}`").into(),
            });
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn tmp_path(&self, key: &str) -> PathBuf {
        let n = self.tmp_counter.fetch_add(1, Ordering::Relaxed);
        self.dir
            .join(format!(".{key}.json.{}.{n}.tmp", std::process::id()))
    }

    async fn write_tmp(tmp: &Path, value: &[u8]) -> std::io::Result<()> {
        let mut file = tokio::fs::File::create(tmp).await?;
        file.write_all(value).await?;
        file.sync_all().await
    }
}

#[async_trait]
impl PluginAdapter for FileStorage {
    fn name(&self) -> &str {
        "file"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, ThoughtboxError> {
        self.ensure_initialized()?;
        match tokio::fs::metadata(&self.dir).await {
            Ok(meta) if meta.is_dir() => Ok(HealthStatus::Healthy),
            Ok(_) => Ok(HealthStatus::Unhealthy(format!(
                "{} is not a directory",
                self.dir.display()
            ))),
            Err(e) => Ok(HealthStatus::Unhealthy(format!(
                "{}: {e}",
                self.dir.display()
            ))),
        }
    }

    async fn shutdown(&self) -> Result<(), ThoughtboxError> {
        Ok(())
    }
}

#[async_trait]
impl StorageAdapter for FileStorage {
    async fn initialize(&self) -> Result<(), ThoughtboxError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(ThoughtboxError::storage)?;
        self.initialized.store(true, Ordering::Release);
        debug!(dir = %self.dir.display(), "file storage initialized");
        Ok(())
    }

    async fn close(&self) -> Result<(), ThoughtboxError> {
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, ThoughtboxError> {
        self.ensure_initialized()?;
        let path = self.key_path(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ThoughtboxError::storage(e)),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), ThoughtboxError> {
        self.ensure_initialized()?;
        let path = self.key_path(key)?;
        let tmp = self.tmp_path(key);

        if let Err(e) = Self::write_tmp(&tmp, value.as_bytes()).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(ThoughtboxError::storage(e));
        }

        if let Err(e) = tokio::fs::rename(&tmp, &path).await {
            warn!(key, error = %e, "rename over key file failed");
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(ThoughtboxError::storage(e));
        }
        Ok(())
    }
}
