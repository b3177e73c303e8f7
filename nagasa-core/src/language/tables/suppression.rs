//! Suppression rules for special patterns
//!
//! Fast patterns veto single characters by their neighbours (an apostrophe
//! inside "don't" is not a quote, the ")" of a "1)" list marker closes
//! nothing). Regex patterns veto every terminator inside a match.

use std::ops::Range;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Alpha,
    Alnum,
    Digit,
    Space,
}

impl CharClass {
    fn parse(name: &str) -> Result<Self, String> {
        match name {
            "alpha" => Ok(Self::Alpha),
            "alnum" => Ok(Self::Alnum),
            "digit" => Ok(Self::Digit),
            "space" => Ok(Self::Space),
            other => Err(format!("Unknown character class '{other}'")),
        }
    }

    fn matches(self, ch: char) -> bool {
        match self {
            Self::Alpha => ch.is_alphabetic(),
            Self::Alnum => ch.is_alphanumeric(),
            Self::Digit => ch.is_numeric(),
            Self::Space => ch.is_whitespace(),
        }
    }
}

#[derive(Debug, Clone)]
struct FastPattern {
    ch: char,
    line_start: bool,
    before: Option<CharClass>,
    after: Option<CharClass>,
}

/// A fast pattern as read from configuration
#[derive(Debug, Clone)]
pub struct FastPatternSpec {
    pub ch: char,
    pub line_start: bool,
    pub before: Option<String>,
    pub after: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Suppresser {
    fast: Vec<FastPattern>,
    regexes: Vec<Regex>,
}

impl Suppresser {
    pub fn new(fast: &[FastPatternSpec], regexes: &[String]) -> Result<Self, String> {
        let fast = fast
            .iter()
            .map(|spec| {
                Ok(FastPattern {
                    ch: spec.ch,
                    line_start: spec.line_start,
                    before: spec.before.as_deref().map(CharClass::parse).transpose()?,
                    after: spec.after.as_deref().map(CharClass::parse).transpose()?,
                })
            })
            .collect::<Result<Vec<_>, String>>()?;

        let regexes = regexes
            .iter()
            .map(|pattern| {
                Regex::new(pattern)
                    .map_err(|e| format!("Invalid suppression regex '{pattern}': {e}"))
            })
            .collect::<Result<Vec<_>, String>>()?;

        Ok(Self { fast, regexes })
    }

    /// Is `ch` at byte `pos` vetoed by a fast pattern?
    pub fn should_suppress(&self, text: &str, pos: usize, ch: char) -> bool {
        let mut candidates = self.fast.iter().filter(|p| p.ch == ch).peekable();
        if candidates.peek().is_none() {
            return false;
        }

        let before_text = &text[..pos];
        let prev = before_text.chars().next_back();
        let next = text[pos + ch.len_utf8()..].chars().next();

        candidates.any(|pattern| {
            if pattern.line_start && !in_first_token(before_text) {
                return false;
            }
            let before_ok = pattern.before.map_or(true, |class| prev.is_some_and(|c| class.matches(c)));
            let after_ok = pattern.after.map_or(true, |class| next.is_some_and(|c| class.matches(c)));
            before_ok && after_ok
        })
    }

    /// Byte spans of all regex matches, sorted by start
    pub fn spans(&self, text: &str) -> Vec<Range<usize>> {
        let mut spans: Vec<Range<usize>> = self
            .regexes
            .iter()
            .flat_map(|regex| regex.find_iter(text).map(|m| m.range()))
            .filter(|span| !span.is_empty())
            .collect();
        spans.sort_by_key(|span| (span.start, span.end));
        spans
    }
}

/// Is the text between the last line break and here a single token?
fn in_first_token(before: &str) -> bool {
    let line = before.rsplit('\n').next().unwrap_or(before);
    !line.trim_start().contains(char::is_whitespace)
}
