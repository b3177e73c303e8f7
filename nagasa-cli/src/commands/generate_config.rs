//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new configuration
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating language configuration template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to customize language rules");
        println!("2. Validate your configuration:");
        println!(
            "   nagasa validate --language-config {}",
            self.output.display()
        );
        println!("3. Use it to summarize:");
        println!(
            "   nagasa summarize -i input.txt --language-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Sentence-boundary model for {}

[metadata]
code = "{}"
name = "Custom Language"

# Sentence terminator characters
[terminators]
chars = [".", "!", "?"]

# Ellipsis handling
[ellipsis]
# Whether an ellipsis ends a sentence when no rule below applies
treat_as_boundary = true

patterns = ["...", "…"]

# Checked in order; the first matching condition decides
context_rules = [
    {{ condition = "followed_by_capital", boundary = true }},
    {{ condition = "followed_by_lowercase", boundary = false }}
]

# Regex exceptions, checked before the context rules
exceptions = [
    # Example: {{ regex = "\\b(um|uh|er)\\.\\.\\.", boundary = false }}
]

# Terminators inside an open pair never end a sentence
[enclosures]
pairs = [
    {{ open = "(", close = ")" }},
    {{ open = "[", close = "]" }},
    {{ open = "{{", close = "}}" }},
    {{ open = '"', close = '"', symmetric = true }},
    {{ open = "'", close = "'", symmetric = true }}
]

[suppression]
# Characters ignored in a given context
fast_patterns = [
    # Apostrophes in contractions
    {{ char = "'", before = "alpha", after = "alpha" }},
    # List items at line start: 1) item
    {{ char = ")", line_start = true, before = "alnum" }},
    # Inch marks: 12" wide
    {{ char = '"', before = "digit" }}
]

# Terminators inside a match never end a sentence
regex_patterns = [
    {{ pattern = "(?m)^[ \\t]*\\d{{1,3}}\\.", description = "Numbered list marker" }}
]

# Abbreviations by category; category names are free-form.
# Abbreviations in name_prefixes categories come before a name and match
# case-sensitively; a period after one ends the sentence only when a
# sentence starter follows. Any other abbreviation ends the sentence when a
# capitalized word follows.
[abbreviations]
name_prefixes = ["titles"]
titles = ["Dr", "Mr", "Mrs", "Ms", "Prof"]
academic = ["Ph.D", "M.D", "B.A", "M.A"]
business = ["Inc", "Corp", "Ltd", "LLC", "Co"]
common = ["etc", "vs", "e.g", "i.e"]

# Words that start a sentence after a name prefix
[sentence_starters]
pronouns = ["I", "He", "She", "It", "We", "They"]
determiners = ["The", "A", "An"]
"#,
            self.language_code, self.language_code
        )
    }
}
