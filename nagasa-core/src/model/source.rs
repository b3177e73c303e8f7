//! Model identity

use std::fmt;
use std::path::PathBuf;

use crate::language::embedded_language;

/// Identity of a sentence-boundary model
///
/// This is what callers configure; the segmenter never hard-codes a model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModelSource {
    /// Model compiled into the binary, by language code
    Embedded {
        /// Canonical language code when known, otherwise as given
        code: String,
    },
    /// External TOML language configuration
    File {
        /// Path of the configuration file
        path: PathBuf,
        /// Overrides the code declared in the file
        code: Option<String>,
    },
}

impl ModelSource {
    /// Embedded model; aliases such as "english" map to their code
    pub fn embedded(code: impl AsRef<str>) -> Self {
        let code = code.as_ref();
        let code = embedded_language(code)
            .map(|lang| lang.code.to_string())
            .unwrap_or_else(|| code.trim().to_string());
        ModelSource::Embedded { code }
    }

    /// External model file
    pub fn file(path: impl Into<PathBuf>, code: Option<String>) -> Self {
        ModelSource::File {
            path: path.into(),
            code,
        }
    }

    /// Language code requested by this source, if any
    pub fn code(&self) -> Option<&str> {
        match self {
            ModelSource::Embedded { code } => Some(code),
            ModelSource::File { code, .. } => code.as_deref(),
        }
    }
}

impl Default for ModelSource {
    fn default() -> Self {
        ModelSource::embedded("en")
    }
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSource::Embedded { code } => write!(f, "embedded:{code}"),
            ModelSource::File { path, code: Some(code) } => {
                write!(f, "file:{} (code: {code})", path.display())
            }
            ModelSource::File { path, code: None } => write!(f, "file:{}", path.display()),
        }
    }
}
