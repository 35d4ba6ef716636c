// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process key-value storage. Nothing survives the process.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use thoughtbox_core::{AdapterType, HealthStatus, PluginAdapter, StorageAdapter, ThoughtboxError};

/// A `HashMap` behind an async mutex.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates `key`, e.g. with a fixture blob.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self {
            entries: Mutex::new(entries),
        }
    }
}

#[async_trait]
impl PluginAdapter for MemoryStorage {
    fn name(&self) -> &str {
        "memory"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, ThoughtboxError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), ThoughtboxError> {
        Ok(())
    }
}

#[async_trait]
impl StorageAdapter for MemoryStorage {
    async fn initialize(&self) -> Result<(), ThoughtboxError> {
        Ok(())
    }

    async fn close(&self) -> Result<(), ThoughtboxError> {
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, ThoughtboxError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), ThoughtboxError> {
        self.entries.lock().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_entry_is_readable() {
        let storage = MemoryStorage::with_entry("thoughts", "[]");
        assert_eq!(storage.get("thoughts").await.unwrap().as_deref(), Some("[]"));
        assert_eq!(storage.get("other").await.unwrap(), None);
    }
}
