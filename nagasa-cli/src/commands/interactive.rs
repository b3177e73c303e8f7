//! Interactive command implementation

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use nagasa_api::Summarizer;

use crate::clamp_count;
use crate::commands::{init_logging, ModelArgs};
use crate::config::CliConfig;
use crate::session::{Command, Reply, Session, HELP};

/// Arguments for the interactive command
#[derive(Debug, Args)]
pub struct InteractiveArgs {
    /// Number of sentences to keep
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not print the banner and prompts
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl InteractiveArgs {
    /// Execute the interactive command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let count = clamp_count(self.count.unwrap_or(config.summary.default_count));
        let summarizer = self.model.summarizer(&config)?;

        let stdin = io::stdin();
        let prompt = !self.quiet && stdin.is_terminal();
        if prompt {
            eprintln!("nagasa interactive ({})", summarizer.language());
            eprintln!("{HELP}");
        }

        run(
            &mut Session::new(count),
            &summarizer,
            stdin.lock(),
            io::stdout().lock(),
            prompt,
        )
    }
}

/// Drive a session from `input` until `:quit` or end of input
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    summarizer: &Summarizer,
    input: R,
    mut output: W,
    prompt: bool,
) -> Result<()> {
    if prompt {
        eprint!("> ");
    }

    for line in input.lines() {
        let line = line.context("Failed to read input")?;

        match Command::parse(&line) {
            Ok(command) => match session.apply(command, summarizer)? {
                Reply::Silent => {}
                Reply::Summary(summary) => {
                    if summary.is_empty() {
                        writeln!(output, "(empty summary)")?;
                    }
                    for sentence in &summary {
                        writeln!(output, "- {sentence}")?;
                    }
                }
                Reply::Message(message) => writeln!(output, "{message}")?,
                Reply::Warning(warning) => eprintln!("{warning}"),
                Reply::Quit => break,
            },
            Err(message) => eprintln!("{message}"),
        }
        output.flush()?;

        if prompt {
            eprint!("> ");
        }
    }

    Ok(())
}
