//! Language-specific rules for sentence boundary detection
//!
//! A language "model" is a TOML document describing terminators, ellipses,
//! enclosures, suppression patterns, abbreviations and sentence starters.
//! It is compiled once into [`ConfigurableLanguageRules`].

pub mod config;
pub mod interface;
pub mod loader;
pub mod runtime;
pub(crate) mod tables;

pub use config::LanguageConfig;
pub use interface::*;
pub use loader::{available_languages, embedded_language, EmbeddedLanguage};
pub use runtime::ConfigurableLanguageRules;
