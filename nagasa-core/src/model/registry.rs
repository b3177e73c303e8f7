//! Process-wide model cache
//!
//! Each model gets its own slot so that concurrent first callers of the same
//! model wait for a single load, while loads of different models proceed in
//! parallel. Failed loads leave the slot empty and the next caller retries.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use crate::error::Result;
use crate::language::ConfigurableLanguageRules;
use crate::model::provider::ModelProvider;
use crate::model::source::ModelSource;

type Slot = Arc<Mutex<Option<Arc<ConfigurableLanguageRules>>>>;

static GLOBAL: OnceLock<ModelRegistry> = OnceLock::new();

/// Cache of loaded models keyed by [`ModelSource`]
#[derive(Debug, Default)]
pub struct ModelRegistry {
    slots: Mutex<HashMap<ModelSource, Slot>>,
}

impl ModelRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shared by the whole process
    pub fn global() -> &'static ModelRegistry {
        GLOBAL.get_or_init(ModelRegistry::new)
    }

    /// Return the cached model, loading it through `provider` on first use
    pub fn get_or_load(
        &self,
        source: &ModelSource,
        provider: &ModelProvider,
    ) -> Result<Arc<ConfigurableLanguageRules>> {
        let slot = {
            let mut slots = lock(&self.slots);
            Arc::clone(slots.entry(source.clone()).or_default())
        };

        let mut cached = lock(&slot);
        if let Some(rules) = cached.as_ref() {
            return Ok(Arc::clone(rules));
        }

        let rules = Arc::new(provider.load(source)?);
        log::debug!("Loaded model {source}");
        *cached = Some(Arc::clone(&rules));
        Ok(rules)
    }

    /// Whether `source` has been loaded successfully
    pub fn is_loaded(&self, source: &ModelSource) -> bool {
        let slot = lock(&self.slots).get(source).cloned();
        slot.is_some_and(|slot| lock(&slot).is_some())
    }

    /// Number of loaded models
    pub fn len(&self) -> usize {
        let slots: Vec<Slot> = lock(&self.slots).values().cloned().collect();
        slots.iter().filter(|slot| lock(slot).is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// A panic while loading leaves the slot empty; the data is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::model::provider::{InstallEmbedded, ModelAcquirer};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use tempfile::TempDir;

    #[derive(Clone)]
    struct CountingInstall(Arc<AtomicUsize>);

    impl ModelAcquirer for CountingInstall {
        fn acquire(&self, source: &ModelSource) -> Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            InstallEmbedded.acquire(source)
        }
    }

    #[test]
    fn test_same_model_is_shared() {
        let registry = ModelRegistry::new();
        let provider = ModelProvider::new();

        let a = registry.get_or_load(&ModelSource::embedded("en"), &provider).unwrap();
        let b = registry
            .get_or_load(&ModelSource::embedded("english"), &provider)
            .unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_failures_are_not_cached() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("en.toml");
        let source = ModelSource::file(&path, None);
        let registry = ModelRegistry::new();

        let err = registry
            .get_or_load(&source, &ModelProvider::without_acquisition())
            .unwrap_err();
        assert!(matches!(err, CoreError::ModelNotFound { .. }));
        assert!(!registry.is_loaded(&source));

        registry.get_or_load(&source, &ModelProvider::new()).unwrap();
        assert!(registry.is_loaded(&source));
    }

    #[test]
    fn test_concurrent_first_use_acquires_once() {
        let dir = TempDir::new().unwrap();
        let source = ModelSource::file(dir.path().join("models/en.toml"), None);
        let registry = Arc::new(ModelRegistry::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = ModelProvider::with_acquirer(CountingInstall(Arc::clone(&calls)));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let provider = provider.clone();
                let source = source.clone();
                thread::spawn(move || registry.get_or_load(&source, &provider).unwrap())
            })
            .collect();

        let loaded: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(loaded.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[test]
    fn test_global_is_singleton() {
        assert!(std::ptr::eq(ModelRegistry::global(), ModelRegistry::global()));
    }
}
