//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};

/// One text to summarize
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File the text came from; `None` for inline text or stdin
    pub source: Option<PathBuf>,
    /// Full text
    pub text: String,
}

impl Document {
    /// Display name for headers and logs
    pub fn name(&self) -> String {
        self.source
            .as_ref()
            .map_or_else(|| "<text>".to_string(), |p| p.display().to_string())
    }

    /// True if there is nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Gather documents: files first, otherwise inline text, otherwise stdin
///
/// File text takes precedence over manually entered text. Manual text is
/// trimmed. Standard input is only read when it is not a terminal.
pub fn collect_documents(patterns: &[String], text: Option<&str>) -> Result<Vec<Document>> {
    if !patterns.is_empty() {
        if text.is_some() {
            log::info!("Input files given; ignoring --text");
        }
        return resolve_patterns(patterns)?
            .into_iter()
            .map(|path| {
                let text = FileReader::read_text(&path)?;
                Ok(Document {
                    source: Some(path),
                    text,
                })
            })
            .collect();
    }

    let manual = match text {
        Some(text) => text.to_string(),
        None => read_stdin()?,
    };

    Ok(vec![Document {
        source: None,
        text: manual.trim().to_string(),
    }])
}

fn read_stdin() -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }

    let mut bytes = Vec::new();
    stdin
        .lock()
        .read_to_end(&mut bytes)
        .context("Failed to read standard input")?;
    FileReader::decode(bytes, "standard input")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_text_takes_precedence() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "From the file.").unwrap();

        let docs =
            collect_documents(&[path.display().to_string()], Some("From the argument.")).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].text, "From the file.");
        assert_eq!(docs[0].source.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_manual_text_is_trimmed() {
        let docs = collect_documents(&[], Some("  Typed text.  \n")).unwrap();
        assert_eq!(
            docs,
            vec![Document {
                source: None,
                text: "Typed text.".to_string()
            }]
        );
        assert_eq!(docs[0].name(), "<text>");
    }

    #[test]
    fn test_blank_document() {
        let docs = collect_documents(&[], Some(" \n\t")).unwrap();
        assert!(docs[0].is_blank());
    }
}
