//! Sentence segmentation and length-ranked selection
//!
//! This crate holds the algorithmic core of nagasa, an extractive summarizer
//! that keeps the N longest sentences of a document.
//!
//! # Architecture
//!
//! - **language**: sentence-boundary models, compiled from TOML into
//!   [`ConfigurableLanguageRules`]
//! - **model**: model identity, loading with one-shot acquisition and the
//!   process-wide model cache
//! - **segmenter**: splits a document into trimmed [`Sentence`]s
//! - **selector**: ranks sentences by character count with a stable tie order
//!
//! # Example
//!
//! ```rust
//! use nagasa_core::{select, Segmenter};
//!
//! let segmenter = Segmenter::for_language("en").unwrap();
//!
//! let text = "Short. This is a much longer sentence. Mid length one.";
//! let sentences = segmenter.segment(text);
//! assert_eq!(sentences.len(), 3);
//!
//! let summary = select(&sentences, 1);
//! assert_eq!(summary[0].text, "This is a much longer sentence.");
//! ```

pub mod error;
pub mod language;
pub mod model;
pub mod segmenter;
pub mod selector;

pub use error::{CoreError, Result};
pub use language::{
    available_languages, BoundaryKind, ConfigurableLanguageRules, LanguageConfig, LanguageRules,
};
pub use model::{
    get_model, InstallEmbedded, ModelAcquirer, ModelProvider, ModelRegistry, ModelSource,
    NoAcquire,
};
pub use segmenter::{Boundary, Segmenter, Sentence};
pub use selector::{ranked_positions, select};

/// Segment `text` and keep its `count` longest sentences
pub fn summarize<'a>(segmenter: &Segmenter, text: &'a str, count: usize) -> Vec<Sentence<'a>> {
    select(&segmenter.segment(text), count)
}
