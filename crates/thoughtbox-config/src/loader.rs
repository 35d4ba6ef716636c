// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./thoughtbox.toml` > `~/.config/thoughtbox/thoughtbox.toml`
//! > `/etc/thoughtbox/thoughtbox.toml`, with `THOUGHTBOX_` environment overrides.

// figment::Error is external and cannot be boxed without a wrapper.
#![allow(clippy::result_large_err)]

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::ThoughtboxConfig;

const SYSTEM_CONFIG: &str = "/etc/thoughtbox/thoughtbox.toml";
const LOCAL_CONFIG: &str = "thoughtbox.toml";

/// Config sections that environment variables may target.
const SECTIONS: &[&str] = &["app", "storage", "ocr", "display"];

/// Path of the per-user config file, if a config directory exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("thoughtbox").join(LOCAL_CONFIG))
}

/// Files consulted by [`load_config`], lowest precedence first.
pub fn config_file_candidates() -> Vec<PathBuf> {
    let mut files = vec![PathBuf::from(SYSTEM_CONFIG)];
    files.extend(user_config_path());
    files.push(PathBuf::from(LOCAL_CONFIG));
    files
}

/// Builds the layered Figment without extracting it.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/thoughtbox/thoughtbox.toml`
/// 3. `~/.config/thoughtbox/thoughtbox.toml`
/// 4. `./thoughtbox.toml`
/// 5. `THOUGHTBOX_*` environment variables
pub fn build_figment() -> Figment {
    config_file_candidates()
        .into_iter()
        .fold(
            Figment::new().merge(Serialized::defaults(ThoughtboxConfig::default())),
            |figment, path| figment.merge(Toml::file(path)),
        )
        .merge(env_provider())
}

/// Load configuration from the standard hierarchy with env var overrides.
pub fn load_config() -> Result<ThoughtboxConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no environment).
pub fn load_config_from_str(toml_content: &str) -> Result<ThoughtboxConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ThoughtboxConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file, still honouring env overrides.
///
/// Unlike the standard hierarchy, the file must exist.
pub fn load_config_from_path(path: &Path) -> Result<ThoughtboxConfig, figment::Error> {
    if !path.is_file() {
        return Err(figment::Error::from(format!(
            "config file {} does not exist",
            path.display()
        )));
    }
    Figment::new()
        .merge(Serialized::defaults(ThoughtboxConfig::default()))
        .merge(Toml::file_exact(path))
        .merge(env_provider())
        .extract()
}

/// `THOUGHTBOX_<SECTION>_<KEY>` maps to `<section>.<key>`.
///
/// Only the first underscore after a known section name becomes a dot, so
/// `THOUGHTBOX_STORAGE_DATABASE_PATH` targets `storage.database_path`.
/// Variable names are matched case-insensitively.
fn env_provider() -> Env {
    Env::prefixed("THOUGHTBOX_").map(|key| {
        let key = key.as_str().to_ascii_lowercase();
        SECTIONS
            .iter()
            .find_map(|section| {
                key.strip_prefix(section)
                    .and_then(|rest| rest.strip_prefix('_'))
                    .map(|rest| format!("{section}.{rest}"))
            })
            .unwrap_or(key)
            .into()
    })
}
