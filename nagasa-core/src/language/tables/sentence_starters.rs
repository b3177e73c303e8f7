//! Sentence starters
//!
//! Words commonly found at the beginning of sentences. An abbreviation
//! followed by one of them still ends its sentence ("... in the U.S. However,").

use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct SentenceStarterTable {
    starters: HashSet<String>,
    max_length: usize,
}

impl SentenceStarterTable {
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        let starters: HashSet<String> = words.into_iter().cloned().collect();
        let max_length = starters.iter().map(String::len).max().unwrap_or(0);
        Self {
            starters,
            max_length,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.starters.is_empty()
    }

    /// Case-sensitive membership test
    pub fn is_sentence_starter(&self, word: &str) -> bool {
        word.len() <= self.max_length && self.starters.contains(word)
    }

    /// First alphabetic word of `rest` after leading whitespace
    pub fn next_word(rest: &str) -> Option<&str> {
        let trimmed = rest.trim_start();
        let end = trimmed
            .char_indices()
            .find(|&(_, ch)| !ch.is_alphabetic())
            .map(|(idx, _)| idx)
            .unwrap_or(trimmed.len());
        (end > 0).then(|| &trimmed[..end])
    }

    /// Does whitespace and then a capitalized word (or the end of text)
    /// follow?
    pub fn capital_follows(rest: &str) -> bool {
        match rest.chars().next() {
            None => true,
            Some(ch) if !ch.is_whitespace() => false,
            Some(_) => rest
                .trim_start()
                .chars()
                .next()
                .map_or(true, char::is_uppercase),
        }
    }

    /// Does the text after an abbreviation start a new sentence?
    ///
    /// `rest` begins right after the abbreviation's period. End of text
    /// counts as a new sentence; text glued to the period ("U.S.A") never
    /// does.
    pub fn starts_sentence(&self, rest: &str) -> bool {
        match rest.chars().next() {
            None => return true,
            Some(ch) if !ch.is_whitespace() => return false,
            Some(_) => {}
        }

        match Self::next_word(rest) {
            Some(word) => self.is_sentence_starter(word),
            None => rest.trim().is_empty(),
        }
    }
}
