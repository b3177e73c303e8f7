//! CLI command implementations

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use nagasa_api::{Config, Summarizer};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::language_source::{Language, LanguageSource};

pub mod generate_config;
pub mod interactive;
pub mod summarize;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Summarize text by keeping its longest sentences
    Summarize(summarize::SummarizeArgs),

    /// Draft text and summarize it line by line
    Interactive(interactive::InteractiveArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a language configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a language configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available language rules
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Summarize(args) => args.execute(),
            Commands::Interactive(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    fn execute(&self) {
        match self {
            ListCommands::Languages => {
                println!("Available languages:");
                for lang in nagasa_api::available_languages() {
                    println!("  {:<10} ({})", lang.name, lang.code);
                }
                println!();
                println!("Other languages: --language-config FILE (see generate-config)");
            }
            ListCommands::Formats => {
                println!("Available formats:");
                println!("  text       One sentence per line");
                println!("  json       Summary and metadata as JSON");
                println!("  markdown   Bullet list");
            }
        }
    }
}

/// Language model options shared by summarizing commands
#[derive(Debug, Default, Args)]
pub struct ModelArgs {
    /// Language for sentence detection rules
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// External language configuration file (TOML)
    #[arg(long, value_name = "FILE", conflicts_with = "language")]
    pub language_config: Option<PathBuf>,

    /// Language code to use with --language-config
    #[arg(long, value_name = "CODE", requires = "language_config")]
    pub language_code: Option<String>,

    /// Do not install a missing language config file
    #[arg(long)]
    pub no_acquire: bool,
}

impl ModelArgs {
    /// Resolve the language source; flags win over the config file
    pub fn language_source(&self, config: &CliConfig) -> Result<LanguageSource> {
        if let Some(path) = &self.language_config {
            return Ok(LanguageSource::External {
                path: path.clone(),
                language_code: self.language_code.clone(),
            });
        }
        if let Some(lang) = self.language {
            return Ok(LanguageSource::BuiltIn(lang));
        }
        if let Some(path) = &config.model.language_config {
            return Ok(LanguageSource::External {
                path: path.clone(),
                language_code: config.model.language_code.clone(),
            });
        }

        let name = &config.summary.default_language;
        Language::parse(name)
            .map(LanguageSource::BuiltIn)
            .ok_or_else(|| CliError::ConfigError(format!("unknown default_language '{name}'")).into())
    }

    /// Build a summarizer for these options
    pub fn summarizer(&self, config: &CliConfig) -> Result<Summarizer> {
        let source = self.language_source(config)?;
        log::info!("Language: {}", source.display_name());

        let acquire = config.model.acquire && !self.no_acquire;
        let api_config = source
            .configure(Config::builder())?
            .acquire(acquire)
            .build()?;
        Ok(Summarizer::with_config(api_config)?)
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A logger may already be installed when commands run in-process
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_language_beats_config() {
        let args = ModelArgs {
            language: Some(Language::Japanese),
            ..Default::default()
        };
        let source = args.language_source(&CliConfig::default()).unwrap();
        assert_eq!(source, LanguageSource::BuiltIn(Language::Japanese));
    }

    #[test]
    fn test_config_model_file_is_used() {
        let mut config = CliConfig::default();
        config.model.language_config = Some(PathBuf::from("custom.toml"));
        config.model.language_code = Some("xx".to_string());

        let source = ModelArgs::default().language_source(&config).unwrap();
        assert_eq!(
            source,
            LanguageSource::External {
                path: PathBuf::from("custom.toml"),
                language_code: Some("xx".to_string()),
            }
        );
    }

    #[test]
    fn test_unknown_default_language() {
        let mut config = CliConfig::default();
        config.summary.default_language = "klingon".to_string();

        let err = ModelArgs::default().language_source(&config).unwrap_err();
        assert!(err.to_string().contains("klingon"));
    }

    #[test]
    fn test_default_summarizer_is_english() {
        let summarizer = ModelArgs::default().summarizer(&CliConfig::default()).unwrap();
        assert_eq!(summarizer.language(), "en");
    }
}
