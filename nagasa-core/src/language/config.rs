//! Configuration structures and validation
//!
//! This module defines the TOML schema of a sentence-boundary model.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    pub terminators: Terminators,
    #[serde(default)]
    pub ellipsis: Ellipsis,
    #[serde(default)]
    pub enclosures: Enclosures,
    #[serde(default)]
    pub suppression: Suppression,
    #[serde(default)]
    pub abbreviations: Abbreviations,
    #[serde(default)]
    pub sentence_starters: SentenceStarters,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Terminator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terminators {
    pub chars: Vec<char>,
}

/// Ellipsis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ellipsis {
    #[serde(default = "default_true")]
    pub treat_as_boundary: bool,
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub context_rules: Vec<ContextRule>,
    #[serde(default)]
    pub exceptions: Vec<Exception>,
}

impl Default for Ellipsis {
    fn default() -> Self {
        Self {
            treat_as_boundary: true,
            patterns: Vec::new(),
            context_rules: Vec::new(),
            exceptions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextRule {
    pub condition: String,
    pub boundary: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exception {
    pub regex: String,
    pub boundary: bool,
}

/// Enclosure configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Enclosures {
    #[serde(default)]
    pub pairs: Vec<EnclosurePair>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnclosurePair {
    pub open: char,
    pub close: char,
    #[serde(default)]
    pub symmetric: bool,
}

/// Suppression configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Suppression {
    #[serde(default)]
    pub fast_patterns: Vec<FastPattern>,
    #[serde(default)]
    pub regex_patterns: Vec<RegexPattern>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FastPattern {
    pub char: char,
    #[serde(default)]
    pub line_start: bool,
    pub before: Option<String>,
    pub after: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegexPattern {
    pub pattern: String,
    pub description: String,
}

/// Abbreviation configuration
///
/// Abbreviations in a `name_prefixes` category come before a name ("Dr.",
/// "St.") and match case-sensitively. A period after one only ends the
/// sentence when a sentence starter follows. Any other abbreviation ("km.",
/// "Inc.") ends the sentence when a capitalized word follows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Abbreviations {
    #[serde(default = "default_name_prefixes")]
    pub name_prefixes: Vec<String>,
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

impl Default for Abbreviations {
    fn default() -> Self {
        Self {
            name_prefixes: default_name_prefixes(),
            categories: HashMap::new(),
        }
    }
}

impl Abbreviations {
    /// Abbreviations that come before a name
    pub fn prefixes(&self) -> impl Iterator<Item = &String> {
        self.categories
            .iter()
            .filter(|(name, _)| self.name_prefixes.contains(name))
            .flat_map(|(_, words)| words)
    }

    /// All other abbreviations
    pub fn others(&self) -> impl Iterator<Item = &String> {
        self.categories
            .iter()
            .filter(|(name, _)| !self.name_prefixes.contains(name))
            .flat_map(|(_, words)| words)
    }
}

/// Sentence starters configuration
///
/// A capitalized word from these lists after an abbreviation turns the
/// abbreviation's period into a boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentenceStarters {
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

fn default_true() -> bool {
    true
}

fn default_name_prefixes() -> Vec<String> {
    vec!["titles".to_string()]
}

impl LanguageConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(source: &str) -> Result<Self, String> {
        toml::from_str(source).map_err(|e| e.to_string())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("Language code must not be empty".to_string());
        }

        // Check enclosure pairs limit
        if self.enclosures.pairs.len() > 255 {
            return Err("Too many enclosure pairs (max 255)".to_string());
        }

        // Check terminator chars not empty
        if self.terminators.chars.is_empty() {
            return Err("No terminator characters defined".to_string());
        }

        if self.ellipsis.patterns.iter().any(|p| p.is_empty()) {
            return Err("Ellipsis patterns must not be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[metadata]
code = "xx"
name = "Minimal"

[terminators]
chars = ["."]
"#;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = LanguageConfig::from_toml(MINIMAL).unwrap();
        assert_eq!(config.metadata.code, "xx");
        assert!(config.ellipsis.treat_as_boundary);
        assert!(config.enclosures.pairs.is_empty());
        assert!(config.abbreviations.categories.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_code() {
        let mut config = LanguageConfig::from_toml(MINIMAL).unwrap();
        config.metadata.code = "  ".to_string();
        assert!(config.validate().unwrap_err().contains("code"));
    }

    #[test]
    fn test_validation_rejects_missing_terminators() {
        let mut config = LanguageConfig::from_toml(MINIMAL).unwrap();
        config.terminators.chars.clear();
        assert!(config.validate().unwrap_err().contains("terminator"));
    }

    #[test]
    fn test_abbreviation_categories_are_flattened() {
        let source = format!("{MINIMAL}\n[abbreviations]\ntitles = [\"Dr\", \"Mr\"]\n");
        let config = LanguageConfig::from_toml(&source).unwrap();
        assert_eq!(config.abbreviations.categories["titles"], vec!["Dr", "Mr"]);
        assert_eq!(config.abbreviations.name_prefixes, vec!["titles"]);
    }

    #[test]
    fn test_name_prefix_categories() {
        let source = format!(
            "{MINIMAL}\n[abbreviations]\nname_prefixes = [\"titles\", \"places\"]\n\
             titles = [\"Dr\"]\nplaces = [\"Mt\"]\nunits = [\"km\"]\n"
        );
        let config = LanguageConfig::from_toml(&source).unwrap();
        let abbreviations = &config.abbreviations;

        assert!(!abbreviations.categories.contains_key("name_prefixes"));
        let mut prefixes: Vec<&String> = abbreviations.prefixes().collect();
        prefixes.sort();
        assert_eq!(prefixes, vec!["Dr", "Mt"]);
        assert_eq!(abbreviations.others().collect::<Vec<_>>(), vec!["km"]);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = LanguageConfig::from_toml("[metadata]\ncode = 1").unwrap_err();
        assert!(!err.is_empty());
    }
}
