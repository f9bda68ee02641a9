//! Import configuration.
//!
//! Handles loading and validating `config.yaml` — the identity of the catalog
//! host plus the default attributes stamped onto every emoji record in a run.
//!
//! ## Config File Schema
//!
//! ```yaml
//! host: example.social
//! emojiParameter:
//!   license: CC0
//!   isSensitive: false
//!   localonly: false
//!   category: misc
//! ```
//!
//! The key spellings are the catalog exporter's wire names and are preserved
//! exactly (`emojiParameter`, `isSensitive`, `localonly`). Every key is
//! required; a config file that is missing, unreadable, or fails to parse
//! aborts the run. Unknown keys are rejected to catch typos early.
//!
//! The loaded value is immutable for the run and injected into the pipeline
//! by `main` — nothing below the CLI reads the config path.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `config.yaml`.
///
/// All fields are required. Malformed configuration is always fatal,
/// never silently defaulted.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmojiConfig {
    /// Hostname of the catalog instance the manifest is destined for.
    pub host: String,
    /// Default attributes applied uniformly to every record.
    #[serde(rename = "emojiParameter")]
    pub emoji: EmojiDefaults,
}

/// Per-record defaults from the `emojiParameter` block.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmojiDefaults {
    pub license: String,
    #[serde(rename = "isSensitive")]
    pub is_sensitive: bool,
    #[serde(rename = "localonly")]
    pub local_only: bool,
    pub category: String,
}

impl EmojiConfig {
    /// Validate values the schema alone cannot reject.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Validation("host must not be empty".into()));
        }
        Ok(())
    }
}

/// Load and validate the configuration file at `path`.
pub fn load_config(path: &Path) -> Result<EmojiConfig, ConfigError> {
    let raw = fs::read_to_string(path)?;
    let config: EmojiConfig = serde_yaml::from_str(&raw)?;
    config.validate()?;
    Ok(config)
}
