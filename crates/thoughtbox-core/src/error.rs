// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for Thoughtbox.

use thiserror::Error;

/// Boxed error source carried by backend-facing variants.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The primary error type used across all Thoughtbox adapter traits and core operations.
#[derive(Debug, Error)]
pub enum ThoughtboxError {
    /// A persisted read or write did not complete (I/O failure, quota, serialization).
    #[error("storage error: {source}")]
    Storage { source: BoxError },

    /// A persisted value exists but does not have the expected shape.
    #[error("malformed data under key `{key}`: {source}")]
    MalformedData { key: String, source: BoxError },

    /// Text extraction from an image or document failed.
    #[error("ocr error: {message}")]
    Ocr {
        message: String,
        source: Option<BoxError>,
    },
}

impl ThoughtboxError {
    /// Wraps any error as a [`ThoughtboxError::Storage`].
    pub fn storage<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ThoughtboxError::Storage {
            source: Box::new(err),
        }
    }

    /// Returns true for errors raised by the persistence medium itself.
    pub fn is_storage(&self) -> bool {
        matches!(self, ThoughtboxError::Storage { .. })
    }

    /// Returns true when persisted data could not be decoded.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ThoughtboxError::MalformedData { .. })
    }
}
