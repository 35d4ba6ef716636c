// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OCR adapter that replays queued results.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use thoughtbox_core::{AdapterType, HealthStatus, OcrAdapter, PluginAdapter, ThoughtboxError};

/// Returns queued extraction results in FIFO order and records each path it
/// was asked about. An empty queue yields `"scripted text"`.
#[derive(Default)]
pub struct ScriptedOcr {
    results: Mutex<VecDeque<Result<String, String>>>,
    seen: Mutex<Vec<PathBuf>>,
}

impl ScriptedOcr {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful extraction.
    pub async fn push_text(&self, text: impl Into<String>) {
        self.results.lock().await.push_back(Ok(text.into()));
    }

    /// Queues a failed extraction with `message`.
    pub async fn push_failure(&self, message: impl Into<String>) {
        self.results.lock().await.push_back(Err(message.into()));
    }

    /// Paths passed to either extraction method, in call order.
    pub async fn seen(&self) -> Vec<PathBuf> {
        self.seen.lock().await.clone()
    }

    async fn next(&self, path: &Path) -> Result<String, ThoughtboxError> {
        self.seen.lock().await.push(path.to_path_buf());
        match self.results.lock().await.pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(ThoughtboxError::Ocr {
                message,
                source: None,
            }),
            None => Ok("scripted text".to_string()),
        }
    }
}

#[async_trait]
impl PluginAdapter for ScriptedOcr {
    fn name(&self) -> &str {
        "scripted-ocr"
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
impl OcrAdapter for ScriptedOcr {
    async fn extract_text_from_image(&self, image: &Path) -> Result<String, ThoughtboxError> {
        self.next(image).await
    }

    async fn extract_text_from_document(
        &self,
        document: &Path,
    ) -> Result<String, ThoughtboxError> {
        self.next(document).await
    }
}
