// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Simulated OCR: waits, then returns canned text.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use tracing::debug;

use thoughtbox_config::model::OcrConfig;
use thoughtbox_core::{AdapterType, HealthStatus, OcrAdapter, PluginAdapter, ThoughtboxError};

/// Quotations returned for images, one chosen at random per call.
pub const SAMPLE_QUOTES: [&str; 8] = [
    "The only way to do great work is to love what you do. Stay hungry, stay foolish.",
    "Innovation distinguishes between a leader and a follower. Think different.",
    "The best and most beautiful things in the world cannot be seen or even touched - \
     they must be felt with the heart.",
    "Success is not final, failure is not fatal: it is the courage to continue that counts.",
    "The mind is everything. What you think you become.",
    "Strive not to be a success, but rather to be of value.",
    "Life is what happens to you while you're busy making other plans.",
    "The future belongs to those who believe in the beauty of their dreams.",
];

/// Text returned for every document.
pub const DOCUMENT_TEXT: &str = "This is extracted text from a document. \
    In a real implementation, this would use OCR services to extract actual text \
    from PDF or other document formats.";

/// Simulated extractor with a configurable processing delay.
#[derive(Debug, Clone)]
pub struct MockOcr {
    delay: Duration,
}

impl MockOcr {
    pub fn new(config: &OcrConfig) -> Self {
        Self::with_delay(Duration::from_millis(config.delay_ms))
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Documents take half again as long as images.
    fn document_delay(&self) -> Duration {
        self.delay + self.delay / 2
    }
}

async fn ensure_readable(path: &Path) -> Result<(), ThoughtboxError> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(ThoughtboxError::Ocr {
            message: format!("{} is not a file", path.display()),
            source: None,
        }),
        Err(e) => Err(ThoughtboxError::Ocr {
            message: format!("cannot read {}", path.display()),
            source: Some(Box::new(e)),
        }),
    }
}

#[async_trait]
impl PluginAdapter for MockOcr {
    fn name(&self) -> &str {
        "mock-ocr"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Ocr
    }

    async fn health_check(&self) -> Result<HealthStatus, ThoughtboxError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), ThoughtboxError> {
        Ok(())
    }
}

#[async_trait]
impl OcrAdapter for MockOcr {
    async fn extract_text_from_image(&self, image: &Path) -> Result<String, ThoughtboxError> {
        ensure_readable(image).await?;
        debug!(
            path = %image.display(),
            delay_ms = self.delay.as_millis() as u64,
            "extracting text from image"
        );
        tokio::time::sleep(self.delay).await;

        let quote = SAMPLE_QUOTES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(SAMPLE_QUOTES[0]);
        Ok(quote.to_string())
    }

    async fn extract_text_from_document(
        &self,
        document: &Path,
    ) -> Result<String, ThoughtboxError> {
        ensure_readable(document).await?;
        debug!(path = %document.display(), "extracting text from document");
        tokio::time::sleep(self.document_delay()).await;
        Ok(DOCUMENT_TEXT.to_string())
    }
}
