// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OCR adapter trait for turning photographed text into thought content.

use std::path::Path;

use async_trait::async_trait;

use crate::error::ThoughtboxError;
use crate::traits::adapter::PluginAdapter;

/// Adapter for text extraction services.
///
/// The returned string is raw content; callers trim and validate it before
/// handing it to the store.
#[async_trait]
pub trait OcrAdapter: PluginAdapter {
    /// Extracts text from the image at `image`.
    async fn extract_text_from_image(&self, image: &Path) -> Result<String, ThoughtboxError>;

    /// Extracts text from a document (PDF or similar) at `document`.
    async fn extract_text_from_document(&self, document: &Path)
    -> Result<String, ThoughtboxError>;
}
