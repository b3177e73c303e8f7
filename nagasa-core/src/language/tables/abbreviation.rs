//! Abbreviation trie
//!
//! Abbreviations are stored without their final period ("Dr", "U.S", "e.g").
//! Lookups walk the word that ends at a period.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, u32>,
    is_end: bool,
}

/// Abbreviation trie with contiguous node storage
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    case_sensitive: bool,
}

/// Characters that end a word when scanning backwards from a period
fn is_word_delimiter(ch: char) -> bool {
    ch.is_whitespace()
        || matches!(
            ch,
            ',' | ';' | ':' | '(' | ')' | '[' | ']' | '{' | '}' | '"' | '\'' | '!' | '?'
                | '“' | '”' | '‘' | '’'
        )
}

impl Trie {
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            case_sensitive,
        }
    }

    /// Build from configuration categories
    ///
    /// Multi-period abbreviations also register their prefixes ("U.S.A"
    /// registers "U" and "U.S") so every inner period is recognised.
    pub fn from_categories<'a, I>(abbreviations: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut trie = Self::new(case_sensitive);

        for abbr in abbreviations {
            let abbr = abbr.trim_end_matches('.');
            if abbr.is_empty() {
                continue;
            }
            trie.insert(abbr);

            for (idx, _) in abbr.match_indices('.').filter(|&(idx, _)| idx > 0) {
                trie.insert(&abbr[..idx]);
            }
        }

        trie
    }

    fn normalize(&self, ch: char) -> char {
        if self.case_sensitive {
            ch
        } else {
            ch.to_lowercase().next().unwrap_or(ch)
        }
    }

    pub fn insert(&mut self, abbreviation: &str) {
        let mut current = 0usize;

        for ch in abbreviation.chars() {
            let ch = self.normalize(ch);
            current = match self.nodes[current].children.get(&ch) {
                Some(&child) => child as usize,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.insert(ch, child as u32);
                    child
                }
            };
        }

        self.nodes[current].is_end = true;
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Does an abbreviation end at the period `text[dot_pos]`?
    pub fn find_abbrev(&self, text: &str, dot_pos: usize) -> bool {
        if self.is_empty() || dot_pos == 0 || !text[dot_pos..].starts_with('.') {
            return false;
        }

        let before = &text[..dot_pos];
        let word_start = before
            .char_indices()
            .rev()
            .find(|&(_, ch)| is_word_delimiter(ch))
            .map(|(idx, ch)| idx + ch.len_utf8())
            .unwrap_or(0);

        self.matches(&before[word_start..])
    }

    /// Exact match of a whole word (without trailing period)
    pub fn matches(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut current = 0usize;
        for ch in word.chars() {
            match self.nodes[current].children.get(&self.normalize(ch)) {
                Some(&next) => current = next as usize,
                None => return false,
            }
        }

        self.nodes[current].is_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie(words: &[&str]) -> Trie {
        let owned: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        Trie::from_categories(&owned, false)
    }

    #[test]
    fn test_basic_abbreviations() {
        let trie = trie(&["Dr", "Mr", "U.S"]);

        // dot_pos is the byte index of the period
        assert!(trie.find_abbrev("Dr.", 2));
        assert!(trie.find_abbrev("Mr.", 2));
        assert!(trie.find_abbrev("Hello Dr.", 8));
        assert!(!trie.find_abbrev("Ms.", 2));
        assert!(!trie.find_abbrev("Drs.", 3));
    }

    #[test]
    fn test_multi_period_abbreviations() {
        let trie = trie(&["U.S.A", "Ph.D"]);

        assert!(trie.find_abbrev("U.", 1), "prefix 'U' registered");
        assert!(trie.find_abbrev("U.S.", 3), "prefix 'U.S' registered");
        assert!(trie.find_abbrev("U.S.A.", 5));
        assert!(trie.find_abbrev("from the U.S.A.", 14));
        assert!(trie.find_abbrev("a Ph.D.", 6));
    }

    #[test]
    fn test_word_starts_after_delimiters() {
        let trie = trie(&["etc"]);

        assert!(trie.find_abbrev("apples, pears,etc.", 17));
        assert!(trie.find_abbrev("(etc.", 4));
        assert!(!trie.find_abbrev("fetc.", 4));
    }

    #[test]
    fn test_case_insensitive() {
        let trie = trie(&["Dr"]);

        assert!(trie.find_abbrev("dr.", 2));
        assert!(trie.find_abbrev("DR.", 2));
        assert!(trie.matches("dR"));
    }

    #[test]
    fn test_case_sensitive() {
        let words = vec!["Dr".to_string()];
        let trie = Trie::from_categories(&words, true);

        assert!(trie.matches("Dr"));
        assert!(!trie.matches("dr"));
    }

    #[test]
    fn test_non_period_position() {
        let trie = trie(&["Dr"]);
        assert!(!trie.find_abbrev("Dr!", 2));
        assert!(!trie.find_abbrev(".", 0));
    }
}
