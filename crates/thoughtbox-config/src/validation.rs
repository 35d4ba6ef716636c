// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as non-empty paths and a well-formed category list.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use thoughtbox_core::ALL_CATEGORY;

use crate::model::{StorageBackend, ThoughtboxConfig};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &ThoughtboxConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.app.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "app.log_level `{}` is not one of {}",
                config.app.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    match config.storage.backend {
        StorageBackend::Sqlite if config.storage.database_path.trim().is_empty() => {
            errors.push(ConfigError::Validation {
                message: "storage.database_path must not be empty for the sqlite backend"
                    .to_string(),
            });
        }
        StorageBackend::File if config.storage.data_dir.trim().is_empty() => {
            errors.push(ConfigError::Validation {
                message: "storage.data_dir must not be empty for the file backend".to_string(),
            });
        }
        _ => {}
    }

    let categories = &config.display.categories;
    if !categories.iter().any(|c| c == ALL_CATEGORY) {
        errors.push(ConfigError::Validation {
            message: format!("display.categories must include `{ALL_CATEGORY}`"),
        });
    }

    let mut seen = HashSet::new();
    for (i, category) in categories.iter().enumerate() {
        if category.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("display.categories[{i}] must not be empty"),
            });
        } else if !seen.insert(category.as_str()) {
            errors.push(ConfigError::Validation {
                message: format!("duplicate category `{category}` in display.categories"),
            });
        }
    }

    let default_category = config.display.default_category.trim();
    if default_category.is_empty() {
        errors.push(ConfigError::Validation {
            message: "display.default_category must not be empty".to_string(),
        });
    } else if default_category == ALL_CATEGORY {
        errors.push(ConfigError::Validation {
            message: format!(
                "display.default_category must not be the `{ALL_CATEGORY}` filter sentinel"
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_message(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        let config = ThoughtboxConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_database_path_fails_validation_for_sqlite() {
        let mut config = ThoughtboxConfig::default();
        config.storage.database_path = "".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "database_path"));
    }

    #[test]
    fn empty_database_path_is_fine_for_memory_backend() {
        let mut config = ThoughtboxConfig::default();
        config.storage.backend = StorageBackend::Memory;
        config.storage.database_path = "".to_string();
        config.storage.data_dir = "".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_data_dir_fails_validation_for_file_backend() {
        let mut config = ThoughtboxConfig::default();
        config.storage.backend = StorageBackend::File;
        config.storage.data_dir = "   ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "data_dir"));
    }

    #[test]
    fn categories_without_all_fail_validation() {
        let mut config = ThoughtboxConfig::default();
        config.display.categories = vec!["Work".into(), "Home".into()];
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "must include `All`"));
    }

    #[test]
    fn duplicate_and_blank_categories_are_all_reported() {
        let mut config = ThoughtboxConfig::default();
        config.display.categories = vec!["All".into(), "Work".into(), "Work".into(), " ".into()];
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(has_message(&errors, "duplicate category `Work`"));
        assert!(has_message(&errors, "display.categories[3]"));
    }

    #[test]
    fn all_sentinel_is_rejected_as_default_category() {
        let mut config = ThoughtboxConfig::default();
        config.display.default_category = "All".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "default_category"));
    }

    #[test]
    fn unknown_log_level_fails_validation() {
        let mut config = ThoughtboxConfig::default();
        config.app.log_level = "verbose".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "app.log_level"));
    }
}
