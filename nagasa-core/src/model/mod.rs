//! Sentence-boundary model management
//!
//! A model is a compiled language configuration. [`ModelSource`] names it,
//! [`ModelProvider`] loads it (installing it once when it is missing) and
//! [`ModelRegistry`] keeps one shared instance per model for the process.

mod provider;
mod registry;
mod source;

pub use provider::{load_source, InstallEmbedded, ModelAcquirer, ModelProvider, NoAcquire};
pub use registry::ModelRegistry;
pub use source::ModelSource;

use std::sync::Arc;

use crate::error::Result;
use crate::language::ConfigurableLanguageRules;

/// Load `source` through the global registry with the default provider
pub fn get_model(source: &ModelSource) -> Result<Arc<ConfigurableLanguageRules>> {
    ModelRegistry::global().get_or_load(source, &ModelProvider::new())
}
