//! Runtime tables for language rules

pub mod abbreviation;
pub mod ellipsis;
pub mod enclosure;
pub mod sentence_starters;
pub mod suppression;
pub mod terminator;

pub use abbreviation::Trie;
pub use ellipsis::EllipsisSet;
pub use enclosure::{EncTable, EnclosureDepth};
pub use sentence_starters::SentenceStarterTable;
pub use suppression::{FastPatternSpec, Suppresser};
pub use terminator::{classify_dot, TermTable};
