//! Language source management for CLI

use std::path::PathBuf;

use anyhow::Result;
use clap::ValueEnum;
use nagasa_api::ConfigBuilder;

/// Built-in languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    /// English language rules
    English,
    /// Japanese language rules
    Japanese,
}

impl Language {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Japanese => "Japanese",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Japanese => "ja",
        }
    }

    /// Parse a name or code from a config file ("english", "ja", ...)
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::value_variants()
            .iter()
            .copied()
            .find(|lang| {
                lang.as_str().eq_ignore_ascii_case(value) || lang.code().eq_ignore_ascii_case(value)
            })
    }
}

/// Source of language rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSource {
    /// Built-in language
    BuiltIn(Language),
    /// External configuration file
    External {
        /// Path to the configuration file
        path: PathBuf,
        /// Optional language code override
        language_code: Option<String>,
    },
}

impl LanguageSource {
    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(lang) => format!("Built-in: {}", lang.as_str()),
            LanguageSource::External {
                path,
                language_code,
            } => {
                if let Some(code) = language_code {
                    format!("External: {} (code: {})", path.display(), code)
                } else {
                    format!("External: {}", path.display())
                }
            }
        }
    }

    /// Point an API configuration at this source
    pub fn configure(&self, builder: ConfigBuilder) -> Result<ConfigBuilder> {
        Ok(match self {
            LanguageSource::BuiltIn(lang) => builder.language(lang.code())?,
            LanguageSource::External {
                path,
                language_code,
            } => {
                let builder = builder.language_config(path);
                match language_code {
                    Some(code) => builder.language_code(code),
                    None => builder,
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nagasa_api::{Config, ModelSource};

    #[test]
    fn test_parse_language() {
        assert_eq!(Language::parse("english"), Some(Language::English));
        assert_eq!(Language::parse("JA"), Some(Language::Japanese));
        assert_eq!(Language::parse("klingon"), None);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            LanguageSource::BuiltIn(Language::Japanese).display_name(),
            "Built-in: Japanese"
        );
        let external = LanguageSource::External {
            path: PathBuf::from("fr.toml"),
            language_code: Some("fr".to_string()),
        };
        assert_eq!(external.display_name(), "External: fr.toml (code: fr)");
    }

    #[test]
    fn test_configure_external() {
        let source = LanguageSource::External {
            path: PathBuf::from("fr.toml"),
            language_code: None,
        };
        let config = source.configure(Config::builder()).unwrap().build().unwrap();
        assert_eq!(config.model_source(), ModelSource::file("fr.toml", None));
    }
}
