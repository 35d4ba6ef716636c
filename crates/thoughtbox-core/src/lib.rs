// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Thoughtbox.
//!
//! Holds the error type, the persisted [`Thought`] record and its update
//! types, and the adapter traits every collaborator (storage backend, OCR
//! extractor, session provider) implements.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{BoxError, ThoughtboxError};
pub use types::{
    ALL_CATEGORY, AdapterType, AppState, HealthStatus, NewThought, Thought, ThoughtPatch,
};

pub use traits::{AuthAdapter, OcrAdapter, PluginAdapter, StorageAdapter};
