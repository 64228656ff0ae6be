//! Configuration model for the prompt wallet.
//!
//! This module defines the Config struct that represents `<data_dir>/config.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.

use crate::error::{Result, WalletError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the prompt wallet.
///
/// Every field is optional in the YAML; a missing or empty file yields
/// [`Config::default`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Storage
    // =========================================================================
    /// File name of the prompt collection inside the data directory.
    pub store_file: String,

    /// Write the bundled sample prompts when the collection is empty.
    pub seed_samples: bool,

    /// Append an entry to `events.ndjson` for every change and copy.
    pub audit_log: bool,

    // =========================================================================
    // Derived fields
    // =========================================================================
    /// Number of content characters kept in a generated preview.
    pub preview_length: usize,

    /// Tag shown for prompts without a category.
    pub default_category: String,

    // =========================================================================
    // Field limits (characters)
    // =========================================================================
    pub max_title_len: usize,
    pub max_content_len: usize,
    pub max_description_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_file: "prompts.json".to_string(),
            seed_samples: true,
            audit_log: true,
            preview_length: 80,
            default_category: "Other".to_string(),
            max_title_len: 100,
            max_content_len: 2000,
            max_description_len: 500,
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            WalletError::StorageError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| WalletError::StorageError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    #[cfg(test)]
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            WalletError::StorageError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `store_file` must be a bare, non-empty file name
    /// - `preview_length` and every `max_*_len` must be positive
    /// - `default_category` must not be blank
    pub fn validate(&self) -> Result<()> {
        if self.store_file.trim().is_empty() {
            return Err(invalid("store_file must not be empty"));
        }
        if self.store_file.contains(['/', '\\']) || self.store_file == ".." {
            return Err(WalletError::UserError(format!(
                "config validation failed: store_file must be a file name, not a path (found '{}')",
                self.store_file
            )));
        }

        let limits = [
            ("preview_length", self.preview_length),
            ("max_title_len", self.max_title_len),
            ("max_content_len", self.max_content_len),
            ("max_description_len", self.max_description_len),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(invalid(&format!("{} must be greater than 0", name)));
            }
        }

        if self.default_category.trim().is_empty() {
            return Err(invalid("default_category must not be empty"));
        }

        Ok(())
    }
}

fn invalid(reason: &str) -> WalletError {
    WalletError::UserError(format!("config validation failed: {}", reason))
}
