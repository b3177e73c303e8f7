//! Embedded language configurations

/// A language model compiled into the binary
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedLanguage {
    /// Canonical language code
    pub code: &'static str,
    /// Long name accepted as an alias ("english")
    pub name: &'static str,
    /// TOML source
    pub source: &'static str,
}

const EMBEDDED: &[EmbeddedLanguage] = &[
    EmbeddedLanguage {
        code: "en",
        name: "english",
        source: include_str!("../../configs/languages/english.toml"),
    },
    EmbeddedLanguage {
        code: "ja",
        name: "japanese",
        source: include_str!("../../configs/languages/japanese.toml"),
    },
];

/// Look up an embedded language by code or name (case-insensitive)
pub fn embedded_language(code: &str) -> Option<&'static EmbeddedLanguage> {
    let code = code.trim();
    EMBEDDED
        .iter()
        .find(|lang| lang.code.eq_ignore_ascii_case(code) || lang.name.eq_ignore_ascii_case(code))
}

/// All embedded languages
pub fn available_languages() -> &'static [EmbeddedLanguage] {
    EMBEDDED
}
