//! Summarize command implementation

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use nagasa_api::{Summarizer, Summary};
use rayon::prelude::*;

use crate::commands::{init_logging, ModelArgs};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{collect_documents, Document};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use crate::{clamp_count, EMPTY_INPUT_WARNING};

/// Arguments for the summarize command
#[derive(Debug, Args)]
pub struct SummarizeArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Text to summarize (ignored when input files are given)
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Number of sentences to keep (zero or less gives an empty summary)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also save each summary as summary.txt in this directory
    #[arg(long, value_name = "DIR")]
    pub download: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of summaries with metadata
    Json,
    /// Markdown bullet list
    Markdown,
}

impl SummarizeArgs {
    /// Execute the summarize command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting summarization");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let count = clamp_count(self.count.unwrap_or(config.summary.default_count));
        let format = self.output_format(&config)?;

        let documents = collect_documents(&self.input, self.text.as_deref())?;
        if documents.iter().all(Document::is_blank) {
            eprintln!("{EMPTY_INPUT_WARNING}");
            return Ok(());
        }

        let summarizer = self.model.summarizer(&config)?;
        let summaries = self.summarize_all(&summarizer, &documents, count);

        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        let several = documents.len() > 1;
        for (doc, summary) in documents.iter().zip(&summaries) {
            let name = doc.name();
            formatter.format_summary(several.then_some(name.as_str()), summary)?;
        }
        formatter.finish()?;

        if let Some(dir) = &self.download {
            save_downloads(dir, &documents, &summaries)?;
        }

        log::info!("Summarized {} document(s)", documents.len());
        Ok(())
    }

    fn output_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        let name = &config.output.default_format;
        OutputFormat::from_str(name, true)
            .map_err(|_| CliError::ConfigError(format!("unknown default_format '{name}'")).into())
    }

    /// Summaries in document order; documents are independent
    fn summarize_all(
        &self,
        summarizer: &Summarizer,
        documents: &[Document],
        count: usize,
    ) -> Vec<Summary> {
        let mut progress = ProgressReporter::new(self.quiet || documents.len() < 2);
        progress.init_files(documents.len() as u64);

        let summaries = documents
            .par_iter()
            .map(|doc| {
                let summary = summarizer.summarize(&doc.text, count);
                progress.file_completed(&doc.name());
                summary
            })
            .collect();

        progress.finish();
        summaries
    }
}

/// One `summary.txt` for a single document, one folder per document otherwise
fn save_downloads(dir: &Path, documents: &[Document], summaries: &[Summary]) -> Result<()> {
    let targets: Vec<PathBuf> = if documents.len() > 1 {
        download_folders(documents)
            .into_iter()
            .map(|folder| dir.join(folder))
            .collect()
    } else {
        vec![dir.to_path_buf(); documents.len()]
    };

    for ((doc, summary), target) in documents.iter().zip(summaries).zip(&targets) {
        if summary.is_empty() {
            log::warn!("Nothing to save for {}", doc.name());
            continue;
        }

        let saved = summary
            .download()
            .save_in(target)
            .with_context(|| format!("Failed to save summary in {}", target.display()))?;
        log::info!("Saved {}", saved.display());
    }
    Ok(())
}

/// Folder names for several documents: the file stem, numbered by document
/// position when stems collide ("notes-1", "notes-2")
fn download_folders(documents: &[Document]) -> Vec<String> {
    let stems: Vec<String> = documents
        .iter()
        .map(|doc| match &doc.source {
            Some(path) => path
                .file_stem()
                .unwrap_or(path.as_os_str())
                .to_string_lossy()
                .into_owned(),
            None => "text".to_string(),
        })
        .collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for stem in &stems {
        *counts.entry(stem.as_str()).or_default() += 1;
    }

    let mut used: HashSet<String> = stems
        .iter()
        .filter(|stem| counts[stem.as_str()] == 1)
        .cloned()
        .collect();

    stems
        .iter()
        .enumerate()
        .map(|(idx, stem)| {
            if counts[stem.as_str()] == 1 {
                return stem.clone();
            }
            let mut number = idx + 1;
            loop {
                let name = format!("{stem}-{number}");
                if used.insert(name.clone()) {
                    return name;
                }
                number += documents.len();
            }
        })
        .collect()
}
