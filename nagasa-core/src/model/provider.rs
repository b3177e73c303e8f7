//! Model loading with one-shot acquisition
//!
//! [`ModelProvider::load`] attempts a load. Only a "not found" failure
//! triggers the configured [`ModelAcquirer`], after which the load is retried
//! exactly once. Every other failure, and any failure of the retry, is
//! returned to the caller.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use crate::error::{CoreError, Result};
use crate::language::{embedded_language, ConfigurableLanguageRules, LanguageConfig};
use crate::model::source::ModelSource;

/// Fetches or installs a model that could not be found
pub trait ModelAcquirer: Send + Sync {
    /// Make `source` loadable
    fn acquire(&self, source: &ModelSource) -> Result<()>;
}

/// Installs the embedded configuration at a missing model path
///
/// The file gets the embedded model matching the source's code override,
/// English when there is none.
#[derive(Debug, Default, Clone, Copy)]
pub struct InstallEmbedded;

impl ModelAcquirer for InstallEmbedded {
    fn acquire(&self, source: &ModelSource) -> Result<()> {
        let ModelSource::File { path, code } = source else {
            // Embedded models are never "not found"
            return Ok(());
        };

        let code = code.as_deref().unwrap_or("en");
        let lang = embedded_language(code).ok_or_else(|| CoreError::Acquisition {
            model: source.to_string(),
            reason: format!("no embedded model to install for '{code}'"),
        })?;

        install(path, lang.source).map_err(|e| CoreError::Acquisition {
            model: source.to_string(),
            reason: e.to_string(),
        })?;

        log::info!("Installed embedded '{}' model at {}", lang.code, path.display());
        Ok(())
    }
}

/// Leaves missing models missing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAcquire;

impl ModelAcquirer for NoAcquire {
    fn acquire(&self, source: &ModelSource) -> Result<()> {
        match source {
            ModelSource::File { path, .. } => Err(CoreError::ModelNotFound { path: path.clone() }),
            ModelSource::Embedded { .. } => Ok(()),
        }
    }
}

fn install(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}

/// Loads models, acquiring missing ones at most once per load
#[derive(Clone)]
pub struct ModelProvider {
    acquirer: Arc<dyn ModelAcquirer>,
}

impl fmt::Debug for ModelProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelProvider").finish_non_exhaustive()
    }
}

impl Default for ModelProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelProvider {
    /// Provider that installs embedded models for missing files
    pub fn new() -> Self {
        Self::with_acquirer(InstallEmbedded)
    }

    /// Provider with a custom acquisition step
    pub fn with_acquirer<A: ModelAcquirer + 'static>(acquirer: A) -> Self {
        Self {
            acquirer: Arc::new(acquirer),
        }
    }

    /// Provider that reports missing models without acquiring them
    pub fn without_acquisition() -> Self {
        Self::with_acquirer(NoAcquire)
    }

    /// Load a model: attempt, acquire on "not found", retry once
    pub fn load(&self, source: &ModelSource) -> Result<ConfigurableLanguageRules> {
        let first = match load_source(source) {
            Ok(rules) => return Ok(rules),
            Err(e) => e,
        };

        if !first.is_not_found() {
            log::warn!("Failed to load {source}: {first}");
            return Err(first);
        }

        log::info!("{first}; acquiring {source}");
        self.acquirer.acquire(source)?;

        load_source(source).map_err(|e| {
            log::warn!("Failed to load {source} after acquisition: {e}");
            CoreError::ModelUnavailable {
                model: source.to_string(),
                reason: e.to_string(),
            }
        })
    }
}

/// Single load attempt without acquisition
pub fn load_source(source: &ModelSource) -> Result<ConfigurableLanguageRules> {
    match source {
        ModelSource::Embedded { code } => {
            let lang = embedded_language(code)
                .ok_or_else(|| CoreError::UnsupportedLanguage(code.clone()))?;
            ConfigurableLanguageRules::from_toml(lang.source).map_err(|reason| {
                CoreError::InvalidModel {
                    model: source.to_string(),
                    reason,
                }
            })
        }
        ModelSource::File { path, code } => {
            let content = fs::read_to_string(path).map_err(|e| match e.kind() {
                ErrorKind::NotFound => CoreError::ModelNotFound { path: path.clone() },
                _ => CoreError::Io(e),
            })?;

            let invalid = |reason: String| CoreError::InvalidModel {
                model: source.to_string(),
                reason,
            };

            let mut config = LanguageConfig::from_toml(&content).map_err(invalid)?;
            if let Some(code) = code {
                config.metadata.code = code.clone();
            }
            ConfigurableLanguageRules::from_config(&config).map_err(invalid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageRules;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    struct Counting {
        calls: Arc<AtomicUsize>,
        install: bool,
    }

    impl ModelAcquirer for Counting {
        fn acquire(&self, source: &ModelSource) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.install {
                InstallEmbedded.acquire(source)
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_embedded_load() {
        let rules = ModelProvider::new().load(&ModelSource::embedded("en")).unwrap();
        assert_eq!(rules.code(), "en");
    }

    #[test]
    fn test_unsupported_language_is_not_acquired() {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = ModelProvider::with_acquirer(Counting {
            calls: Arc::clone(&calls),
            install: true,
        });

        let err = provider.load(&ModelSource::embedded("xx")).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedLanguage(ref code) if code == "xx"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_missing_file_is_installed_then_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("models").join("ja.toml");
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = ModelProvider::with_acquirer(Counting {
            calls: Arc::clone(&calls),
            install: true,
        });

        let source = ModelSource::file(&path, Some("ja".to_string()));
        let rules = provider.load(&source).unwrap();

        assert_eq!(rules.code(), "ja");
        assert!(path.exists());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_acquisition_retries_once_then_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = ModelProvider::with_acquirer(Counting {
            calls: Arc::clone(&calls),
            install: false,
        });

        let err = provider.load(&ModelSource::file(&path, None)).unwrap_err();
        assert!(matches!(err, CoreError::ModelUnavailable { .. }));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_without_acquisition_reports_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");

        let err = ModelProvider::without_acquisition()
            .load(&ModelSource::file(&path, None))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(!path.exists());
    }

    #[test]
    fn test_invalid_file_is_not_acquired() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[metadata]\ncode = \"zz\"\nname = \"Broken\"\n").unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = ModelProvider::with_acquirer(Counting {
            calls: Arc::clone(&calls),
            install: true,
        });

        let err = provider.load(&ModelSource::file(&path, None)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidModel { .. }));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_code_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, embedded_language("en").unwrap().source).unwrap();

        let rules = load_source(&ModelSource::file(&path, Some("en-GB".to_string()))).unwrap();
        assert_eq!(rules.code(), "en-GB");
    }

    #[test]
    fn test_install_without_embedded_match_fails() {
        let dir = TempDir::new().unwrap();
        let source = ModelSource::file(dir.path().join("fr.toml"), Some("fr".to_string()));
        let err = InstallEmbedded.acquire(&source).unwrap_err();
        assert!(matches!(err, CoreError::Acquisition { .. }));
    }
}
