//! Terminator lookup and dot classification

use std::collections::HashSet;

use crate::language::interface::DotRole;

/// Terminator character set with an ASCII fast path
#[derive(Debug, Clone)]
pub struct TermTable {
    ascii: [bool; 128],
    other: HashSet<char>,
}

impl TermTable {
    pub fn new<I>(terminators: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut ascii = [false; 128];
        let mut other = HashSet::new();

        for ch in terminators {
            if ch.is_ascii() {
                ascii[ch as usize] = true;
            } else {
                other.insert(ch);
            }
        }

        Self { ascii, other }
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii[ch as usize]
        } else {
            self.other.contains(&ch)
        }
    }
}

/// Classify an ASCII dot from its direct neighbours.
#[inline]
pub fn classify_dot(prev: Option<char>, next: Option<char>) -> DotRole {
    match (prev, next) {
        (Some(p), Some(n)) if p.is_ascii_digit() && n.is_ascii_digit() => DotRole::DecimalDot,
        (Some('.'), _) | (_, Some('.')) => DotRole::EllipsisTail,
        _ => DotRole::Ordinary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminator_lookup() {
        let table = TermTable::new(['.', '!', '?', '。', '！', '？']);

        assert!(table.contains('.'));
        assert!(table.contains('!'));
        assert!(table.contains('?'));
        assert!(!table.contains(','));

        assert!(table.contains('。'));
        assert!(table.contains('？'));
        assert!(!table.contains('、'));
    }

    #[test]
    fn test_dot_classification() {
        assert_eq!(classify_dot(Some('3'), Some('1')), DotRole::DecimalDot);
        assert_eq!(classify_dot(Some('.'), None), DotRole::EllipsisTail);
        assert_eq!(classify_dot(None, Some('.')), DotRole::EllipsisTail);
        assert_eq!(classify_dot(Some('e'), Some(' ')), DotRole::Ordinary);
        assert_eq!(classify_dot(Some('3'), None), DotRole::Ordinary);
    }
}
