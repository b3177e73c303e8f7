//! Public API for nagasa extractive summaries
//!
//! A summary keeps the N longest sentences of a document, longest first,
//! with ties in document order.
//!
//! ```rust
//! let summary = nagasa_api::summarize("Hi. Go. Run far now today.", 3).unwrap();
//! assert_eq!(summary.sentences, ["Run far now today.", "Hi.", "Go."]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use std::path::Path;
use std::time::Instant;

use nagasa_core::Segmenter;

// Re-export key types
pub use config::{Config, ConfigBuilder, DEFAULT_COUNT};
pub use dto::{Input, Metadata, Summary, SummaryDownload, SUMMARY_FILE_NAME, SUMMARY_MIME};
pub use error::{ApiError, Result};
pub use nagasa_core::{available_languages, CoreError, ModelSource};

/// Main entry point for summarization
///
/// Holds a segmenter for one model; the model itself is shared process-wide.
#[derive(Debug, Clone)]
pub struct Summarizer {
    segmenter: Segmenter,
    config: Config,
}

impl Summarizer {
    /// Create a summarizer with default configuration (English)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a summarizer for an embedded language
    pub fn with_language(lang_code: &str) -> Result<Self> {
        let config = Config::builder().language(lang_code)?.build()?;
        Self::with_config(config)
    }

    /// Create a summarizer with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let segmenter = Segmenter::from_source(&config.model_source(), &config.provider())?;
        Ok(Self { segmenter, config })
    }

    /// Keep the `count` longest sentences of `text`
    pub fn summarize(&self, text: &str, count: usize) -> Summary {
        let start = Instant::now();

        let sentences = self.segmenter.segment(text);
        let selected: Vec<String> = nagasa_core::select(&sentences, count)
            .into_iter()
            .map(|s| s.text.to_string())
            .collect();

        let metadata = Metadata {
            language: self.language().to_string(),
            document_sentences: sentences.len(),
            requested: count,
            selected: selected.len(),
            total_chars: text.chars().count(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        log::debug!(
            "Selected {} of {} sentences (requested {count})",
            metadata.selected,
            metadata.document_sentences
        );

        Summary {
            sentences: selected,
            metadata,
        }
    }

    /// Read `input` and summarize it with the configured count
    pub fn summarize_input(&self, input: Input) -> Result<Summary> {
        let text = input.read_text()?;
        Ok(self.summarize(&text, self.config.count()))
    }

    /// Split `text` into trimmed sentences in document order
    pub fn segment(&self, text: &str) -> Vec<String> {
        self.segmenter
            .segment(text)
            .into_iter()
            .map(|s| s.text.to_string())
            .collect()
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Code of the loaded language model
    pub fn language(&self) -> &str {
        self.segmenter.rules().code()
    }
}

// Convenience functions

/// Summarize text with the default English model
pub fn summarize(text: &str, count: usize) -> Result<Summary> {
    Ok(Summarizer::new()?.summarize(text, count))
}

/// Summarize text with an embedded language
pub fn summarize_with_language(text: &str, count: usize, lang_code: &str) -> Result<Summary> {
    Ok(Summarizer::with_language(lang_code)?.summarize(text, count))
}

/// Summarize a UTF-8 text file with the default English model
pub fn summarize_file<P: AsRef<Path>>(path: P, count: usize) -> Result<Summary> {
    let text = Input::from_file(path.as_ref()).read_text()?;
    summarize(&text, count)
}

/// Split text into sentences with the default English model
pub fn segment(text: &str) -> Result<Vec<String>> {
    Ok(Summarizer::new()?.segment(text))
}

/// Keep the `count` longest strings, longest first, ties in slice order
///
/// Length is measured in characters.
pub fn select<S: AsRef<str>>(sentences: &[S], count: usize) -> Vec<String> {
    nagasa_core::ranked_positions(
        sentences.iter().map(|s| s.as_ref().chars().count()),
        count,
    )
    .into_iter()
    .map(|pos| sentences[pos].as_ref().to_string())
    .collect()
}
