//! Output formatting module

use anyhow::Result;
use nagasa_api::Summary;

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Format and output the summary of one document
    ///
    /// `source` names the document when several are summarized together.
    fn format_summary(&mut self, source: Option<&str>, summary: &Summary) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

#[cfg(test)]
pub(crate) mod test_support {
    use nagasa_api::{Metadata, Summary};

    pub fn summary(sentences: &[&str]) -> Summary {
        Summary {
            sentences: sentences.iter().map(|s| s.to_string()).collect(),
            metadata: Metadata {
                language: "en".to_string(),
                document_sentences: sentences.len() + 1,
                requested: sentences.len(),
                selected: sentences.len(),
                total_chars: 42,
                processing_time_ms: 0,
            },
        }
    }
}
