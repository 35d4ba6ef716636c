// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by adapter traits and the thought store.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Sentinel category that selects every thought when filtering.
///
/// It is also a legal category value; filtering by it still returns everything.
pub const ALL_CATEGORY: &str = "All";

/// A single persisted note.
///
/// The serialized shape is `{ "id", "content", "category", "timestamp" }` and
/// must stay compatible with collections written by earlier releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thought {
    /// Store-assigned identifier, unique within the collection.
    pub id: String,
    /// The note text.
    pub content: String,
    /// Free-form category label.
    pub category: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// Caller-supplied fields for a new thought. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewThought {
    pub content: String,
    pub category: String,
    pub timestamp: i64,
}

impl NewThought {
    /// Attaches an id, producing the full record.
    pub fn into_thought(self, id: String) -> Thought {
        Thought {
            id,
            content: self.content,
            category: self.category,
            timestamp: self.timestamp,
        }
    }
}

/// Partial update merged over an existing thought.
///
/// Only fields set to `Some` are written. The id is deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThoughtPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl ThoughtPatch {
    /// A patch that only changes the category.
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    /// A patch that only changes the content.
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.category.is_none() && self.timestamp.is_none()
    }

    /// Merges the supplied fields over `thought`.
    pub fn apply(&self, thought: &mut Thought) {
        if let Some(content) = &self.content {
            thought.content = content.clone();
        }
        if let Some(category) = &self.category {
            thought.category = category.clone();
        }
        if let Some(timestamp) = self.timestamp {
            thought.timestamp = timestamp;
        }
    }
}

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the kind of adapter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Storage,
    Ocr,
    Auth,
}

/// Foreground state of the host application, forwarded to lifecycle hooks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AppState {
    /// The app is visible and interactive.
    Active,
    /// The app is running but not visible.
    Background,
    /// Transitional state (e.g. a system dialog is covering the app).
    Inactive,
}
