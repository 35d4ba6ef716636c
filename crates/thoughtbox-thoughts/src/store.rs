// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The thought store: sole reader and writer of the persisted collection.
//!
//! The collection is one JSON array under [`STORAGE_KEY`], newest first.
//! Every mutation reads the whole array, changes it in memory, and writes the
//! whole array back with a single `set`. Nothing is written until the final
//! `set`, so a failure anywhere leaves the stored collection as it was.
//!
//! Operations are not serialized against each other. Two mutations issued
//! concurrently on the same storage race, and the later write replaces the
//! earlier one wholesale.

use std::collections::HashSet;
use std::sync::Arc;

use thoughtbox_core::{NewThought, StorageAdapter, Thought, ThoughtPatch, ThoughtboxError};
use tracing::{debug, error, warn};

use crate::id::IdGenerator;

/// Key under which the collection is persisted.
pub const STORAGE_KEY: &str = "thoughts";

/// Mediates all access to the persisted thought collection.
pub struct ThoughtStore {
    storage: Arc<dyn StorageAdapter>,
    ids: IdGenerator,
}

impl ThoughtStore {
    /// Creates a store over an initialized storage backend.
    pub fn new(storage: Arc<dyn StorageAdapter>) -> Self {
        Self {
            storage,
            ids: IdGenerator::new(),
        }
    }

    /// All thoughts, newest first.
    ///
    /// An absent collection is empty. A collection that exists but cannot be
    /// decoded is a [`ThoughtboxError::MalformedData`] error.
    pub async fn list(&self) -> Result<Vec<Thought>, ThoughtboxError> {
        self.load().await
    }

    /// Stores a new thought at the front of the collection and returns it
    /// with its assigned id.
    pub async fn save(&self, new: NewThought) -> Result<Thought, ThoughtboxError> {
        let mut thoughts = self.load().await?;

        let taken: HashSet<&str> = thoughts.iter().map(|t| t.id.as_str()).collect();
        let mut id = self.ids.next_id();
        while taken.contains(id.as_str()) {
            id = self.ids.next_id();
        }

        let thought = new.into_thought(id);
        thoughts.insert(0, thought.clone());
        self.persist(&thoughts, "save").await?;

        debug!(id = %thought.id, count = thoughts.len(), "thought saved");
        Ok(thought)
    }

    /// Removes the thought with `id`. Removing an absent id succeeds.
    pub async fn delete(&self, id: &str) -> Result<(), ThoughtboxError> {
        let mut thoughts = self.load().await?;
        let before = thoughts.len();
        thoughts.retain(|t| t.id != id);

        if thoughts.len() == before {
            debug!(id, "delete: no thought with this id");
        }
        self.persist(&thoughts, "delete").await
    }

    /// Merges `patch` over the thought with `id`.
    ///
    /// An absent id or an empty patch is a silent no-op and nothing is
    /// written.
    pub async fn update(&self, id: &str, patch: ThoughtPatch) -> Result<(), ThoughtboxError> {
        if patch.is_empty() {
            debug!(id, "update: empty patch");
            return Ok(());
        }
        let mut thoughts = self.load().await?;
        let Some(thought) = thoughts.iter_mut().find(|t| t.id == id) else {
            debug!(id, "update: no thought with this id");
            return Ok(());
        };
        patch.apply(thought);
        self.persist(&thoughts, "update").await
    }

    async fn load(&self) -> Result<Vec<Thought>, ThoughtboxError> {
        let Some(raw) = self.storage.get(STORAGE_KEY).await? else {
            return Ok(Vec::new());
        };
        decode(&raw)
    }

    async fn persist(&self, thoughts: &[Thought], op: &str) -> Result<(), ThoughtboxError> {
        let blob = serde_json::to_string(thoughts).map_err(ThoughtboxError::storage)?;
        self.storage
            .set(STORAGE_KEY, blob)
            .await
            .inspect_err(|e| error!(op, error = %e, "failed to write thought collection"))
    }
}

/// Parses a stored blob. A blank blob counts as an empty collection.
fn decode(raw: &str) -> Result<Vec<Thought>, ThoughtboxError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|e| {
        warn!(key = STORAGE_KEY, error = %e, "stored thought collection is malformed");
        ThoughtboxError::MalformedData {
            key: STORAGE_KEY.to_string(),
            source: Box::new(e),
        }
    })
}
