//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// File name offered for a downloaded summary
pub const SUMMARY_FILE_NAME: &str = "summary.txt";

/// MIME type of a downloaded summary
pub const SUMMARY_MIME: &str = "text/plain";

/// Input source for summarization
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    ///
    /// Files and bytes must be valid UTF-8.
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => String::from_utf8(fs::read(&path)?).map_err(ApiError::Utf8),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut bytes = Vec::new();
                reader.read_to_end(&mut bytes)?;
                String::from_utf8(bytes).map_err(ApiError::Utf8)
            }
        }
    }
}

/// Summary statistics
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Language code of the model used
    pub language: String,
    /// Number of sentences in the document
    pub document_sentences: usize,
    /// Number of sentences requested
    pub requested: usize,
    /// Number of sentences returned
    pub selected: usize,
    /// Total characters in the document
    pub total_chars: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Selected sentences, longest first
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Sentence texts ordered by length descending, ties in document order
    pub sentences: Vec<String>,
    /// Summary statistics
    pub metadata: Metadata,
}

impl Summary {
    /// Number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// True if no sentence was selected
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Iterate over the sentences
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().map(String::as_str)
    }

    /// Sentences joined by newlines
    pub fn to_plain_text(&self) -> String {
        self.sentences.join("\n")
    }

    /// The summary as a downloadable text file
    pub fn download(&self) -> SummaryDownload {
        SummaryDownload {
            file_name: SUMMARY_FILE_NAME.to_string(),
            mime: SUMMARY_MIME.to_string(),
            body: self.to_plain_text(),
        }
    }
}

impl<'a> IntoIterator for &'a Summary {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.iter()
    }
}

/// A summary packaged as a file
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryDownload {
    /// Suggested file name
    pub file_name: String,
    /// MIME type of `body`
    pub mime: String,
    /// File contents
    pub body: String,
}

impl SummaryDownload {
    /// Write the file into `dir`, creating the directory if needed
    pub fn save_in(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.body)?;
        log::info!("Saved summary to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(sentences: &[&str]) -> Summary {
        Summary {
            sentences: sentences.iter().map(|s| s.to_string()).collect(),
            metadata: Metadata {
                language: "en".to_string(),
                document_sentences: sentences.len(),
                requested: sentences.len(),
                selected: sentences.len(),
                total_chars: 0,
                processing_time_ms: 0,
            },
        }
    }

    #[test]
    fn test_download() {
        let download = summary(&["Longest one here.", "Short."]).download();
        assert_eq!(download.file_name, "summary.txt");
        assert_eq!(download.mime, "text/plain");
        assert_eq!(download.body, "Longest one here.\nShort.");
    }

    #[test]
    fn test_empty_summary() {
        let empty = summary(&[]);
        assert!(empty.is_empty());
        assert_eq!(empty.to_plain_text(), "");
    }

    #[test]
    fn test_invalid_utf8_bytes() {
        let err = Input::from_bytes(vec![0xff, 0xfe]).read_text().unwrap_err();
        assert!(matches!(err, ApiError::Utf8(_)));
    }

    #[test]
    fn test_reader_input() {
        let input = Input::from_reader(std::io::Cursor::new(b"From a reader.".to_vec()));
        assert_eq!(input.read_text().unwrap(), "From a reader.");
    }
}
