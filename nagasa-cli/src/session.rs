//! Interactive session state
//!
//! A session holds the text being drafted, the requested summary size and the
//! last summary produced. State only changes through [`Session::apply`].

use std::path::PathBuf;

use anyhow::Result;
use nagasa_api::{Summarizer, Summary};

use crate::{clamp_count, EMPTY_INPUT_WARNING};

/// A line of user input, parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Summarize the draft
    Summarize,
    /// Drop the last summary, keeping the draft
    Clear,
    /// Drop the draft and the last summary
    Reset,
    /// Change the summary size
    Count(i64),
    /// Save the last summary as `summary.txt` in a directory
    Download(PathBuf),
    /// Show the session state
    Show,
    /// List commands
    Help,
    /// End the session
    Quit,
    /// Add a line of text to the draft
    Append(String),
}

impl Command {
    /// Parse one input line; lines not starting with ':' are text
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let trimmed = line.trim();
        let Some(command) = trimmed.strip_prefix(':') else {
            return Ok(Command::Append(line.to_string()));
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        match name {
            "summarize" | "s" => Ok(Command::Summarize),
            "clear" => Ok(Command::Clear),
            "reset" => Ok(Command::Reset),
            "count" | "n" => arg
                .parse()
                .map(Command::Count)
                .map_err(|_| format!("':count' needs a whole number, got '{arg}'")),
            "download" => {
                if arg.is_empty() {
                    Err("':download' needs a directory".to_string())
                } else {
                    Ok(Command::Download(PathBuf::from(arg)))
                }
            }
            "show" => Ok(Command::Show),
            "help" | "h" => Ok(Command::Help),
            "quit" | "q" => Ok(Command::Quit),
            other => Err(format!("Unknown command ':{other}' (try :help)")),
        }
    }
}

/// What the session has to say after a command
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Nothing to report
    Silent,
    /// A fresh summary
    Summary(Summary),
    /// Informational message
    Message(String),
    /// Something the user should fix
    Warning(String),
    /// The session is over
    Quit,
}

/// Session state
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    last_summary: Option<Summary>,
    draft_text: String,
    count: usize,
}

pub const HELP: &str = "\
Type or paste text, then use:
  :summarize        summarize the text entered so far
  :count N          keep the N longest sentences
  :download DIR     save the last summary as DIR/summary.txt
  :show             show the current text and settings
  :clear            clear the summary, keep the text
  :reset            start over
  :quit             leave";

impl Session {
    pub fn new(count: usize) -> Self {
        Self {
            last_summary: None,
            draft_text: String::new(),
            count,
        }
    }

    pub fn last_summary(&self) -> Option<&Summary> {
        self.last_summary.as_ref()
    }

    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Apply one command
    pub fn apply(&mut self, command: Command, summarizer: &Summarizer) -> Result<Reply> {
        let reply = match command {
            Command::Append(line) => {
                self.draft_text.push_str(&line);
                self.draft_text.push('\n');
                Reply::Silent
            }
            Command::Summarize => {
                let text = self.draft_text.trim();
                if text.is_empty() {
                    Reply::Warning(EMPTY_INPUT_WARNING.to_string())
                } else {
                    let summary = summarizer.summarize(text, self.count);
                    self.last_summary = Some(summary.clone());
                    Reply::Summary(summary)
                }
            }
            Command::Clear => {
                self.last_summary = None;
                Reply::Message("Summary cleared.".to_string())
            }
            Command::Reset => {
                self.last_summary = None;
                self.draft_text.clear();
                Reply::Message("Cleared.".to_string())
            }
            Command::Count(count) => {
                self.count = clamp_count(count);
                Reply::Message(format!("Summary size set to {}.", self.count))
            }
            Command::Download(dir) => match &self.last_summary {
                Some(summary) if !summary.is_empty() => {
                    let path = summary.download().save_in(&dir)?;
                    Reply::Message(format!("Saved {}", path.display()))
                }
                _ => Reply::Warning("Nothing to download yet; run :summarize first.".to_string()),
            },
            Command::Show => Reply::Message(format!(
                "{} characters of text, summary size {}, {}",
                self.draft_text.trim().chars().count(),
                self.count,
                match &self.last_summary {
                    Some(summary) => format!("last summary has {} sentences", summary.len()),
                    None => "no summary yet".to_string(),
                }
            )),
            Command::Help => Reply::Message(HELP.to_string()),
            Command::Quit => Reply::Quit,
        };
        Ok(reply)
    }
}
