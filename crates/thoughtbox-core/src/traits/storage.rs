// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage adapter trait: the key-value persistence primitive.

use async_trait::async_trait;

use crate::error::ThoughtboxError;
use crate::traits::adapter::PluginAdapter;

/// Adapter for key-value persistence backends (SQLite, files, memory).
///
/// Values are opaque strings. `set` has overwrite semantics and must be
/// atomic per key: a concurrent or later `get` observes either the previous
/// value or the new one, never a partial write. A failed `set` leaves the
/// previous value in place.
#[async_trait]
pub trait StorageAdapter: PluginAdapter {
    /// Initializes the backend (open connection, create directories, etc.).
    async fn initialize(&self) -> Result<(), ThoughtboxError>;

    /// Closes the backend, flushing pending writes.
    async fn close(&self) -> Result<(), ThoughtboxError>;

    /// Reads the value stored under `key`, or `None` if nothing is stored.
    async fn get(&self, key: &str) -> Result<Option<String>, ThoughtboxError>;

    /// Replaces the value stored under `key`.
    async fn set(&self, key: &str, value: String) -> Result<(), ThoughtboxError>;
}
