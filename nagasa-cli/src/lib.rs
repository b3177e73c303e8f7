//! nagasa CLI library
//!
//! This library provides the command-line interface for nagasa, the
//! length-ranked extractive summarizer.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod language_source;
pub mod output;
pub mod progress;
pub mod session;

pub use error::{CliError, CliResult};

/// Warning shown when there is nothing to summarize
pub const EMPTY_INPUT_WARNING: &str = "Please provide a file or enter some text first.";

/// Summary sizes the interactive UI offered; others still work
pub const RECOMMENDED_COUNTS: std::ops::RangeInclusive<i64> = 1..=10;

/// Clamp a user-supplied count to a usable size
///
/// Zero and negative counts yield an empty summary.
pub fn clamp_count(count: i64) -> usize {
    if !RECOMMENDED_COUNTS.contains(&count) {
        log::warn!(
            "Summary size {count} is outside the recommended range {}..={}",
            RECOMMENDED_COUNTS.start(),
            RECOMMENDED_COUNTS.end()
        );
    }
    usize::try_from(count.max(0)).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_count() {
        assert_eq!(clamp_count(3), 3);
        assert_eq!(clamp_count(0), 0);
        assert_eq!(clamp_count(-4), 0);
        assert_eq!(clamp_count(25), 25);
    }
}
