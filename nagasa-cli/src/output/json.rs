//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use nagasa_api::{Metadata, Summary};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs one object per document in an array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentSummary>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct DocumentSummary {
    /// Input file, if any
    pub source: Option<String>,
    /// Selected sentences, longest first
    pub sentences: Vec<String>,
    /// Summary statistics
    pub metadata: Metadata,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_summary(&mut self, source: Option<&str>, summary: &Summary) -> Result<()> {
        self.documents.push(DocumentSummary {
            source: source.map(str::to_string),
            sentences: summary.sentences.clone(),
            metadata: summary.metadata.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
