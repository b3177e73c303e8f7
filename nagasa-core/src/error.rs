//! Core error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while obtaining a sentence-boundary model
///
/// Segmentation and selection themselves cannot fail; every variant here
/// comes from model loading or acquisition.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No embedded model for this language code
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Model file does not exist
    #[error("language model not found at {}", path.display())]
    ModelNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Model could not be loaded even after acquisition
    #[error("language model {model} is unavailable: {reason}")]
    ModelUnavailable {
        /// Model identity
        model: String,
        /// Last failure
        reason: String,
    },

    /// Model source exists but does not parse or validate
    #[error("invalid language model {model}: {reason}")]
    InvalidModel {
        /// Model identity
        model: String,
        /// Parse or validation failure
        reason: String,
    },

    /// Acquiring a missing model failed
    #[error("failed to acquire language model {model}: {reason}")]
    Acquisition {
        /// Model identity
        model: String,
        /// Acquisition failure
        reason: String,
    },

    /// I/O error while reading a model
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Is this the "not found" kind that triggers acquisition?
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::ModelNotFound { .. })
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_kind() {
        let err = CoreError::ModelNotFound {
            path: PathBuf::from("/models/en.toml"),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "language model not found at /models/en.toml");

        let err = CoreError::UnsupportedLanguage("xx".to_string());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
