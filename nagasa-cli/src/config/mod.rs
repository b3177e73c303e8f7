//! Configuration module
//!
//! Optional TOML file given with `--config`; command-line flags win over it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Summary configuration
    #[serde(default)]
    pub summary: SummaryConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Model configuration
    #[serde(default)]
    pub model: ModelConfig,
}

/// Summary-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Number of sentences to keep
    pub default_count: i64,

    /// Default language ("english" or "japanese")
    pub default_language: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            default_count: 3,
            default_language: "english".to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// External language model configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ModelConfig {
    /// TOML language configuration to load instead of a built-in language
    pub language_config: Option<PathBuf>,

    /// Override for the code declared in `language_config`
    pub language_code: Option<String>,

    /// Install a missing model file from the built-in configuration
    pub acquire: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            language_config: None,
            language_code: None,
            acquire: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        log::debug!("Loaded CLI config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}
