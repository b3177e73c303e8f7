//! Public contract for language rules
//!
//! The segmenter only talks to a language model through [`LanguageRules`].
//! Everything here is cheap to call once per character or once per
//! terminator candidate.

use std::ops::Range;

/// Kind of a detected sentence boundary
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BoundaryKind {
    /// Weak boundary (ellipsis accepted by context)
    Weak,
    /// Strong boundary (period, exclamation, question mark)
    Strong,
    /// Blank line between paragraphs
    Paragraph,
}

/// Information about an enclosure character (bracket, quote, etc.)
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct EnclosureInfo {
    /// Numeric ID of the pair (0-254)
    pub type_id: u8,
    /// +1 for opening, -1 for closing, 0 for a symmetric mark
    pub delta: i8,
    /// true if the identical char opens and closes (straight quote)
    pub symmetric: bool,
}

/// Role of a dot character in context
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DotRole {
    /// Regular sentence-ending period
    Ordinary,
    /// Part of ellipsis (...)
    EllipsisTail,
    /// Decimal point (3.14)
    DecimalDot,
}

/// Decision about a potential boundary
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BoundaryDecision {
    /// Accept as boundary of the given kind
    Accept(BoundaryKind),
    /// Reject - not a boundary
    Reject,
}

/// Context handed to [`LanguageRules::boundary_decision`]
///
/// A candidate is a maximal run of terminator characters
/// (`text[run.start..run.end]`). The segmenter has already looked past any
/// closing enclosures that directly follow the run; `following` is the first
/// character after them.
#[derive(Debug, Clone)]
pub struct BoundaryContext<'a> {
    /// Full document text
    pub text: &'a str,
    /// Byte range of the terminator run
    pub run: Range<usize>,
    /// Character immediately before the run
    pub prev_char: Option<char>,
    /// Character immediately after the run
    pub next_char: Option<char>,
    /// First character after the run and its trailing closers
    pub following: Option<char>,
    /// Byte offset of `following` (text length at end of input)
    pub following_pos: usize,
}

impl<'a> BoundaryContext<'a> {
    /// Text of the terminator run
    pub fn run_text(&self) -> &'a str {
        &self.text[self.run.clone()]
    }

    /// Text after the run and its trailing closers
    pub fn rest(&self) -> &'a str {
        &self.text[self.following_pos..]
    }
}

/// Language-specific rules for sentence boundary detection
pub trait LanguageRules: Send + Sync + 'static {
    /// Language code (e.g. "en")
    fn code(&self) -> &str;

    /// Human readable language name
    fn name(&self) -> &str;

    /// O(1): is this a sentence terminator character?
    fn is_terminator_char(&self, ch: char) -> bool;

    /// O(1): enclosure lookup; None if `ch` is not any bracket/quote
    fn enclosure_info(&self, ch: char) -> Option<EnclosureInfo>;

    /// Classify an ASCII dot from its neighbours
    fn dot_role(&self, prev: Option<char>, next: Option<char>) -> DotRole;

    /// Decide whether a terminator run ends a sentence
    fn boundary_decision(&self, ctx: &BoundaryContext<'_>) -> BoundaryDecision;

    /// Should the character at `pos` be ignored (as enclosure or terminator)?
    fn should_suppress(&self, text: &str, pos: usize, ch: char) -> bool;

    /// Byte spans in which no terminator may end a sentence
    fn suppressed_spans(&self, _text: &str) -> Vec<Range<usize>> {
        Vec::new()
    }

    /// Number of distinct enclosure pair ids
    fn max_enclosure_pairs(&self) -> usize {
        16
    }
}
