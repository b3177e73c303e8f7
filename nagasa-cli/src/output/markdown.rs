//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use nagasa_api::Summary;
use std::io::Write;

/// Markdown formatter - outputs sentences as a bullet list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    sentence_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentence_count: 0,
        }
    }
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn format_summary(&mut self, source: Option<&str>, summary: &Summary) -> Result<()> {
        if let Some(source) = source {
            writeln!(self.writer, "## {source}")?;
            writeln!(self.writer)?;
        }

        for sentence in summary {
            self.sentence_count += 1;
            writeln!(self.writer, "- {sentence}")?;
        }

        if source.is_some() {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.sentence_count > 0 {
            writeln!(self.writer)?;
            writeln!(self.writer, "---")?;
            writeln!(self.writer, "*Summary sentences: {}*", self.sentence_count)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::summary;

    #[test]
    fn test_bullet_list() {
        let mut out = Vec::new();
        let mut formatter = MarkdownFormatter::new(&mut out);
        formatter
            .format_summary(None, &summary(&["The longest one.", "Short."]))
            .unwrap();
        formatter.finish().unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "- The longest one.\n- Short.\n\n---\n*Summary sentences: 2*\n"
        );
    }

    #[test]
    fn test_empty_summary_prints_nothing() {
        let mut out = Vec::new();
        let mut formatter = MarkdownFormatter::new(&mut out);
        formatter.format_summary(None, &summary(&[])).unwrap();
        formatter.finish().unwrap();

        assert!(out.is_empty());
    }
}
