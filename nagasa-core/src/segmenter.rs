//! Sentence segmentation
//!
//! A single left-to-right pass over the text. Enclosure depth is tracked per
//! pair; a terminator run only ends a sentence when no enclosure remains open
//! after the closers that directly follow it, and when the language rules
//! accept it. A blank line always ends a sentence and resets the depth.
//!
//! An opener still open when its paragraph ends encloses nothing: the scan
//! returns to it, ignores it, and continues from there.

use std::collections::HashSet;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::error::Result;
use crate::language::tables::EnclosureDepth;
use crate::language::{BoundaryContext, BoundaryDecision, BoundaryKind, LanguageRules};
use crate::model::{ModelProvider, ModelRegistry, ModelSource};

/// End of a sentence in the original text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    /// Byte offset where the next sentence may start
    pub byte_offset: usize,
    pub kind: BoundaryKind,
}

/// A sentence borrowed from the segmented text
///
/// `text` is trimmed of surrounding whitespace and never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub text: &'a str,
    /// Zero-based index in document order
    pub position: usize,
    /// Byte offset of `text` in the document
    pub byte_offset: usize,
    /// Length in Unicode scalar values
    pub char_len: usize,
}

/// Splits text into sentences with a fixed set of language rules
#[derive(Clone)]
pub struct Segmenter {
    rules: Arc<dyn LanguageRules>,
}

impl fmt::Debug for Segmenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segmenter")
            .field("language", &self.rules.code())
            .finish()
    }
}

struct Candidate {
    boundary: Boundary,
    depth: EnclosureDepth,
    resume: usize,
}

/// An opening enclosure not closed yet, with the scan state just before it
struct OpenMark {
    index: usize,
    type_id: u8,
    depth: EnclosureDepth,
    boundaries: usize,
}

/// Forget the innermost open mark of a pair
fn close_mark(marks: &mut Vec<OpenMark>, type_id: u8) {
    if let Some(idx) = marks.iter().rposition(|m| m.type_id == type_id) {
        marks.remove(idx);
    }
}

impl Segmenter {
    pub fn new(rules: Arc<dyn LanguageRules>) -> Self {
        Self { rules }
    }

    /// Segmenter for an embedded language, loaded once per process
    pub fn for_language(code: &str) -> Result<Self> {
        Self::from_source(&ModelSource::embedded(code), &ModelProvider::new())
    }

    /// Segmenter for any model source, through the process-wide registry
    pub fn from_source(source: &ModelSource, provider: &ModelProvider) -> Result<Self> {
        let rules = ModelRegistry::global().get_or_load(source, provider)?;
        Ok(Self::new(rules))
    }

    pub fn rules(&self) -> &dyn LanguageRules {
        self.rules.as_ref()
    }

    /// Detect sentence boundaries, in increasing offset order
    pub fn boundaries(&self, text: &str) -> Vec<Boundary> {
        let rules = self.rules.as_ref();
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let spans = rules.suppressed_spans(text);
        let mut depth = EnclosureDepth::new(rules.max_enclosure_pairs());
        let mut marks: Vec<OpenMark> = Vec::new();
        let mut ignored: HashSet<usize> = HashSet::new();
        let mut boundaries = Vec::new();

        let mut i = 0;
        loop {
            let paragraph = match chars.get(i) {
                Some(&(_, '\n')) => paragraph_end(&chars, i),
                _ => None,
            };
            let at_end = i >= chars.len();

            if (at_end || paragraph.is_some()) && !marks.is_empty() {
                // Every mark left is unmatched; rescan from the first
                let first = marks.remove(0);
                ignored.insert(first.index);
                ignored.extend(marks.drain(..).map(|m| m.index));
                log::trace!("Ignoring unclosed enclosure at char {}", first.index);

                boundaries.truncate(first.boundaries);
                depth = first.depth;
                i = first.index + 1;
                continue;
            }

            if at_end {
                break;
            }

            if let Some(next) = paragraph {
                boundaries.push(Boundary {
                    byte_offset: chars[i].0,
                    kind: BoundaryKind::Paragraph,
                });
                depth.reset();
                i = next;
                continue;
            }

            let (pos, ch) = chars[i];

            if rules.is_terminator_char(ch) {
                let run_end = (i..chars.len())
                    .find(|&j| !rules.is_terminator_char(chars[j].1))
                    .unwrap_or(chars.len());

                match self.evaluate_run(text, &chars, i..run_end, &depth, &spans, &ignored) {
                    Some(candidate) => {
                        for &(_, closer) in &chars[run_end..candidate.resume] {
                            if let Some(info) = rules.enclosure_info(closer) {
                                close_mark(&mut marks, info.type_id);
                            }
                        }
                        boundaries.push(candidate.boundary);
                        depth = candidate.depth;
                        i = candidate.resume;
                    }
                    None => i = run_end,
                }
                continue;
            }

            if let Some(info) = rules.enclosure_info(ch) {
                if !ignored.contains(&i) && !rules.should_suppress(text, pos, ch) {
                    if depth.closes(info) {
                        close_mark(&mut marks, info.type_id);
                    } else if info.symmetric || info.delta > 0 {
                        marks.push(OpenMark {
                            index: i,
                            type_id: info.type_id,
                            depth: depth.clone(),
                            boundaries: boundaries.len(),
                        });
                    }
                    depth.apply(info);
                }
            }
            i += 1;
        }

        boundaries
    }

    /// Split text into sentences in document order
    pub fn segment<'a>(&self, text: &'a str) -> Vec<Sentence<'a>> {
        let mut sentences = Vec::new();
        let mut start = 0;

        let ends = self
            .boundaries(text)
            .into_iter()
            .map(|b| b.byte_offset)
            .chain(std::iter::once(text.len()));

        for end in ends {
            if end > start {
                push_trimmed(text, start..end, &mut sentences);
                start = end;
            }
        }

        log::debug!(
            "Segmented {} bytes into {} sentences ({})",
            text.len(),
            sentences.len(),
            self.rules.code()
        );
        sentences
    }

    /// `chars[run]` is a maximal terminator run
    fn evaluate_run(
        &self,
        text: &str,
        chars: &[(usize, char)],
        run: Range<usize>,
        depth: &EnclosureDepth,
        spans: &[Range<usize>],
        ignored: &HashSet<usize>,
    ) -> Option<Candidate> {
        let rules = self.rules.as_ref();
        let run_start = chars[run.start].0;
        let run_end = chars.get(run.end).map_or(text.len(), |&(p, _)| p);
        let (last_pos, last_ch) = chars[run.end - 1];

        if spans.iter().any(|span| span.contains(&run_start)) {
            return None;
        }
        if rules.should_suppress(text, last_pos, last_ch) {
            return None;
        }

        // Closers that directly follow the run belong to this sentence
        let mut after = depth.clone();
        let mut closed = false;
        let mut k = run.end;
        while let Some(&(pos, ch)) = chars.get(k) {
            match rules.enclosure_info(ch) {
                Some(info)
                    if after.closes(info)
                        && !ignored.contains(&k)
                        && !rules.should_suppress(text, pos, ch) =>
                {
                    after.apply(info);
                    closed = true;
                    k += 1;
                }
                _ => break,
            }
        }

        if after.is_open() {
            return None;
        }

        let following = chars.get(k).map(|&(_, c)| c);
        let following_pos = chars.get(k).map_or(text.len(), |&(p, _)| p);
        let ctx = BoundaryContext {
            text,
            run: run_start..run_end,
            prev_char: run.start.checked_sub(1).map(|j| chars[j].1),
            next_char: chars.get(run.end).map(|&(_, c)| c),
            following,
            following_pos,
        };

        let kind = match rules.boundary_decision(&ctx) {
            BoundaryDecision::Accept(kind) => kind,
            BoundaryDecision::Reject => return None,
        };

        if closed && !self.starts_new_sentence(&chars[k..]) {
            return None;
        }

        Some(Candidate {
            boundary: Boundary {
                byte_offset: following_pos,
                kind,
            },
            depth: after,
            resume: k,
        })
    }

    /// After a closing quote or bracket, the text must move on: end of input,
    /// an opening enclosure, or whitespace not followed by a lowercase word.
    fn starts_new_sentence(&self, rest: &[(usize, char)]) -> bool {
        let Some(&(_, first)) = rest.first() else {
            return true;
        };
        if self.is_opener(first) {
            return true;
        }
        if !first.is_whitespace() {
            return false;
        }
        rest.iter()
            .map(|&(_, c)| c)
            .find(|c| !c.is_whitespace())
            .map_or(true, |c| !c.is_lowercase())
    }

    fn is_opener(&self, ch: char) -> bool {
        self.rules
            .enclosure_info(ch)
            .is_some_and(|info| info.symmetric || info.delta > 0)
    }
}

/// If `chars[i]` (a newline) starts a blank line, the index of the first
/// character after the whitespace run
fn paragraph_end(chars: &[(usize, char)], i: usize) -> Option<usize> {
    let mut newlines = 1;
    let mut k = i + 1;
    while let Some(&(_, ch)) = chars.get(k) {
        if !ch.is_whitespace() {
            break;
        }
        if ch == '\n' {
            newlines += 1;
        }
        k += 1;
    }
    (newlines >= 2).then_some(k)
}

fn push_trimmed<'a>(text: &'a str, range: Range<usize>, out: &mut Vec<Sentence<'a>>) {
    let slice = &text[range.clone()];
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return;
    }
    out.push(Sentence {
        text: trimmed,
        position: out.len(),
        byte_offset: range.start + (slice.len() - slice.trim_start().len()),
        char_len: trimmed.chars().count(),
    });
}
