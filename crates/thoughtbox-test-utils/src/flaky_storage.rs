// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage wrapper with switchable failures.
//!
//! `FlakyStorage` forwards to an inner [`StorageAdapter`] until told to fail.
//! It also counts writes and can yield to the scheduler around each call,
//! which lets tests interleave two store operations deterministically enough
//! to observe lost updates.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use thoughtbox_core::{AdapterType, HealthStatus, PluginAdapter, StorageAdapter, ThoughtboxError};
use thoughtbox_storage::MemoryStorage;

/// A storage adapter that can be made to fail.
pub struct FlakyStorage {
    inner: Arc<dyn StorageAdapter>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    yield_between: AtomicBool,
    writes: AtomicUsize,
}

impl FlakyStorage {
    /// Wraps `inner`. No failures are armed.
    pub fn new(inner: Arc<dyn StorageAdapter>) -> Self {
        Self {
            inner,
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            yield_between: AtomicBool::new(false),
            writes: AtomicUsize::new(0),
        }
    }

    /// Wraps a fresh [`MemoryStorage`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Makes every subsequent `get` fail (or succeed again).
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent `set` fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Yields to the runtime before each forwarded call.
    pub fn yield_between_calls(&self, enabled: bool) {
        self.yield_between.store(enabled, Ordering::SeqCst);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    async fn maybe_yield(&self) {
        if self.yield_between.load(Ordering::SeqCst) {
            tokio::task::yield_now().await;
        }
    }
}

fn injected(op: &str) -> ThoughtboxError {
    ThoughtboxError::storage(io::Error::other(format!("injected {op} failure")))
}

#[async_trait]
impl PluginAdapter for FlakyStorage {
    fn name(&self) -> &str {
        "flaky"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, ThoughtboxError> {
        if self.fail_reads.load(Ordering::SeqCst) || self.fail_writes.load(Ordering::SeqCst) {
            return Ok(HealthStatus::Degraded("failures armed".into()));
        }
        self.inner.health_check().await
    }

    async fn shutdown(&self) -> Result<(), ThoughtboxError> {
        self.inner.shutdown().await
    }
}

#[async_trait]
impl StorageAdapter for FlakyStorage {
    async fn initialize(&self) -> Result<(), ThoughtboxError> {
        self.inner.initialize().await
    }

    async fn close(&self) -> Result<(), ThoughtboxError> {
        self.inner.close().await
    }

    async fn get(&self, key: &str) -> Result<Option<String>, ThoughtboxError> {
        self.maybe_yield().await;
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(injected("read"));
        }
        let value = self.inner.get(key).await;
        self.maybe_yield().await;
        value
    }

    async fn set(&self, key: &str, value: String) -> Result<(), ThoughtboxError> {
        self.maybe_yield().await;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(injected("write"));
        }
        self.inner.set(key, value).await?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn forwards_until_armed() {
        let storage = FlakyStorage::in_memory();
        storage.set("k", "v".into()).await.unwrap();
        assert_eq!(storage.get("k").await.unwrap().as_deref(), Some("v"));
        assert_eq!(storage.write_count(), 1);

        storage.fail_writes(true);
        assert!(storage.set("k", "w".into()).await.unwrap_err().is_storage());
        assert_eq!(storage.get("k").await.unwrap().as_deref(), Some("v"));
        assert_eq!(storage.write_count(), 1);

        storage.fail_reads(true);
        assert!(storage.get("k").await.unwrap_err().is_storage());
    }

    #[tokio::test]
    async fn reports_degraded_while_armed() {
        let storage = FlakyStorage::in_memory();
        assert_eq!(storage.health_check().await.unwrap(), HealthStatus::Healthy);
        storage.fail_reads(true);
        assert!(matches!(
            storage.health_check().await.unwrap(),
            HealthStatus::Degraded(_)
        ));
    }
}
