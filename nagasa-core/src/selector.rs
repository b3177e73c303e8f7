//! Length-ranked sentence selection
//!
//! Sentences are ranked by character count, longest first. Ties keep
//! document order, so the result is fully determined by the input.

use crate::segmenter::Sentence;

/// Rank items by length and return the positions of the top `count`
///
/// Ordering is length descending, then position ascending. Returns
/// `min(count, len)` positions.
pub fn ranked_positions<I>(lengths: I, count: usize) -> Vec<usize>
where
    I: IntoIterator<Item = usize>,
{
    if count == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<(usize, usize)> = lengths.into_iter().enumerate().collect();
    ranked.sort_by(|(pos_a, len_a), (pos_b, len_b)| {
        len_b.cmp(len_a).then_with(|| pos_a.cmp(pos_b))
    });
    ranked.truncate(count);
    ranked.into_iter().map(|(pos, _)| pos).collect()
}

/// Pick the `count` longest sentences, longest first
pub fn select<'a>(sentences: &[Sentence<'a>], count: usize) -> Vec<Sentence<'a>> {
    ranked_positions(sentences.iter().map(|s| s.char_len), count)
        .into_iter()
        .map(|pos| sentences[pos])
        .collect()
}
