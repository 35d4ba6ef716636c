// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for Thoughtbox.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};
use thoughtbox_core::ALL_CATEGORY;

/// Top-level Thoughtbox configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ThoughtboxConfig {
    /// Application identity and logging.
    #[serde(default)]
    pub app: AppConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Text extraction settings.
    #[serde(default)]
    pub ocr: OcrConfig,

    /// Listing and category settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Application identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Display name used in log output.
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_app_name() -> String {
    "thoughtbox".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Which key-value backend holds the thought collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// A single SQLite database file.
    #[default]
    Sqlite,
    /// One JSON file per key inside a directory.
    File,
    /// Process memory only; nothing survives exit.
    Memory,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Sqlite => "sqlite",
            StorageBackend::File => "file",
            StorageBackend::Memory => "memory",
        }
    }
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Backend selection.
    #[serde(default)]
    pub backend: StorageBackend,

    /// Path to the SQLite database file (`sqlite` backend).
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,

    /// Directory holding one file per key (`file` backend).
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("thoughtbox").join("thoughtbox.db"))
        .unwrap_or_else(|| "thoughtbox.db".into())
        .display()
        .to_string()
}

fn default_wal_mode() -> bool {
    true
}

fn default_data_dir() -> String {
    dirs::data_dir()
        .map(|p| p.join("thoughtbox").join("kv"))
        .unwrap_or_else(|| "thoughtbox-kv".into())
        .display()
        .to_string()
}

/// Text extraction configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OcrConfig {
    /// Simulated processing time for image extraction, in milliseconds.
    #[serde(default = "default_ocr_delay_ms")]
    pub delay_ms: u64,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_ocr_delay_ms(),
        }
    }
}

fn default_ocr_delay_ms() -> u64 {
    2000
}

/// Listing and category configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Category filters offered when browsing, in display order.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Category assigned to new thoughts when none is given.
    #[serde(default = "default_category")]
    pub default_category: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            default_category: default_category(),
        }
    }
}

fn default_categories() -> Vec<String> {
    vec![
        ALL_CATEGORY.to_string(),
        "Category 1".to_string(),
        "Category 2".to_string(),
    ]
}

fn default_category() -> String {
    "Category 1".to_string()
}
