//! High-level configuration API

use std::path::PathBuf;

use nagasa_core::{ModelProvider, ModelSource};

use crate::error::{ApiError, Result};

/// Summary length used when none is given
pub const DEFAULT_COUNT: usize = 3;

/// High-level configuration for summarization
///
/// The model is either an embedded language (`language`) or an external
/// TOML file (`language_config`, optionally with `language_code`).
#[derive(Debug, Clone)]
pub struct Config {
    language: String,
    language_config: Option<PathBuf>,
    language_code: Option<String>,
    acquire: bool,
    count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            language_config: None,
            language_code: None,
            acquire: true,
            count: DEFAULT_COUNT,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Embedded language code or name
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Default number of sentences to keep
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether a missing model file is installed before giving up
    pub fn acquire(&self) -> bool {
        self.acquire
    }

    /// Identity of the configured model
    pub fn model_source(&self) -> ModelSource {
        match &self.language_config {
            Some(path) => ModelSource::file(path, self.language_code.clone()),
            None => ModelSource::embedded(&self.language),
        }
    }

    /// Provider honoring the acquisition setting
    pub fn provider(&self) -> ModelProvider {
        if self.acquire {
            ModelProvider::new()
        } else {
            ModelProvider::without_acquisition()
        }
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the embedded language ("en", "english", "ja", "japanese")
    pub fn language(mut self, language: impl Into<String>) -> Result<Self> {
        let language = language.into();
        if language.trim().is_empty() {
            return Err(ApiError::Config("language must not be empty".to_string()));
        }
        self.config.language = language;
        Ok(self)
    }

    /// Load the model from an external TOML language configuration
    pub fn language_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.language_config = Some(path.into());
        self
    }

    /// Override the code declared by an external language configuration
    pub fn language_code(mut self, code: impl Into<String>) -> Self {
        self.config.language_code = Some(code.into());
        self
    }

    /// Enable or disable installing a missing model file
    pub fn acquire(mut self, acquire: bool) -> Self {
        self.config.acquire = acquire;
        self
    }

    /// Set the default number of sentences to keep
    pub fn count(mut self, count: usize) -> Self {
        self.config.count = count;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.language_code.is_some() && self.config.language_config.is_none() {
            return Err(ApiError::Config(
                "language code override requires a language config file".to_string(),
            ));
        }

        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.language(), "en");
        assert_eq!(config.count(), 3);
        assert!(config.acquire());
        assert_eq!(config.model_source(), ModelSource::embedded("en"));
    }

    #[test]
    fn test_external_model_source() {
        let config = Config::builder()
            .language_config("/models/fr.toml")
            .language_code("fr")
            .build()
            .unwrap();

        assert_eq!(
            config.model_source(),
            ModelSource::file("/models/fr.toml", Some("fr".to_string()))
        );
    }

    #[test]
    fn test_code_without_file_is_rejected() {
        let err = Config::builder().language_code("fr").build().unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_empty_language_is_rejected() {
        assert!(Config::builder().language("  ").is_err());
    }
}
