//! Ellipsis detection and boundary evaluation

use regex::Regex;

use crate::language::interface::{BoundaryContext, BoundaryDecision, BoundaryKind};

/// Context condition for ellipsis boundary determination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextCondition {
    /// Next letter is uppercase
    FollowedByCapital,
    /// Next letter is lowercase
    FollowedByLowercase,
    /// Nothing but whitespace follows
    FollowedByEnd,
}

impl ContextCondition {
    fn parse(name: &str) -> Result<Self, String> {
        match name {
            "followed_by_capital" => Ok(Self::FollowedByCapital),
            "followed_by_lowercase" => Ok(Self::FollowedByLowercase),
            "followed_by_end" => Ok(Self::FollowedByEnd),
            other => Err(format!("Unknown ellipsis condition '{other}'")),
        }
    }

    fn holds(&self, rest: &str) -> bool {
        let next_letter = rest.chars().find(|ch| ch.is_alphabetic());
        match self {
            Self::FollowedByCapital => next_letter.is_some_and(char::is_uppercase),
            Self::FollowedByLowercase => next_letter.is_some_and(char::is_lowercase),
            Self::FollowedByEnd => rest.trim().is_empty(),
        }
    }
}

#[derive(Debug, Clone)]
struct Exception {
    regex: Regex,
    boundary: bool,
}

/// Ellipsis patterns and the rules deciding whether they end a sentence
#[derive(Debug, Clone)]
pub struct EllipsisSet {
    patterns: Vec<String>,
    treat_as_boundary: bool,
    context_rules: Vec<(ContextCondition, bool)>,
    exceptions: Vec<Exception>,
}

/// Bytes of context on each side of an ellipsis matched by exceptions
const EXCEPTION_WINDOW: usize = 20;

impl EllipsisSet {
    pub fn new(
        patterns: Vec<String>,
        treat_as_boundary: bool,
        context_rules: &[(String, bool)],
        exceptions: &[(String, bool)],
    ) -> Result<Self, String> {
        let context_rules = context_rules
            .iter()
            .map(|(condition, boundary)| Ok((ContextCondition::parse(condition)?, *boundary)))
            .collect::<Result<Vec<_>, String>>()?;

        let exceptions = exceptions
            .iter()
            .map(|(pattern, boundary)| {
                Regex::new(pattern)
                    .map(|regex| Exception {
                        regex,
                        boundary: *boundary,
                    })
                    .map_err(|e| format!("Invalid exception regex '{pattern}': {e}"))
            })
            .collect::<Result<Vec<_>, String>>()?;

        Ok(Self {
            patterns,
            treat_as_boundary,
            context_rules,
            exceptions,
        })
    }

    /// Is a terminator run an ellipsis?
    ///
    /// Any run of two or more dots counts, as does a run ending in a
    /// configured pattern ("…").
    pub fn is_ellipsis(&self, run: &str) -> bool {
        run.starts_with("..") || self.patterns.iter().any(|p| run.ends_with(p.as_str()))
    }

    /// Exceptions first, then context rules, then the language default.
    pub fn evaluate(&self, ctx: &BoundaryContext<'_>) -> BoundaryDecision {
        let decide = |boundary: bool| {
            if boundary {
                BoundaryDecision::Accept(BoundaryKind::Weak)
            } else {
                BoundaryDecision::Reject
            }
        };

        if !self.exceptions.is_empty() {
            let start = floor_char_boundary(ctx.text, ctx.run.start.saturating_sub(EXCEPTION_WINDOW));
            let end = ceil_char_boundary(ctx.text, ctx.run.end + EXCEPTION_WINDOW);
            let window = &ctx.text[start..end];
            if let Some(exception) = self.exceptions.iter().find(|e| e.regex.is_match(window)) {
                return decide(exception.boundary);
            }
        }

        let rest = ctx.rest();
        if let Some((_, boundary)) = self
            .context_rules
            .iter()
            .find(|(condition, _)| condition.holds(rest))
        {
            return decide(*boundary);
        }

        decide(self.treat_as_boundary)
    }
}

fn floor_char_boundary(text: &str, mut idx: usize) -> usize {
    idx = idx.min(text.len());
    while !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn ceil_char_boundary(text: &str, mut idx: usize) -> usize {
    idx = idx.min(text.len());
    while !text.is_char_boundary(idx) {
        idx += 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(text: &str, run_start: usize, run_end: usize) -> BoundaryContext<'_> {
        BoundaryContext {
            text,
            run: run_start..run_end,
            prev_char: text[..run_start].chars().next_back(),
            next_char: text[run_end..].chars().next(),
            following: text[run_end..].chars().next(),
            following_pos: run_end,
        }
    }

    fn english() -> EllipsisSet {
        EllipsisSet::new(
            vec!["...".to_string(), "…".to_string()],
            true,
            &[
                ("followed_by_capital".to_string(), true),
                ("followed_by_lowercase".to_string(), false),
            ],
            &[(r"\b(um|uh)\.\.\.".to_string(), false)],
        )
        .unwrap()
    }

    #[test]
    fn test_ellipsis_detection() {
        let set = english();
        assert!(set.is_ellipsis("..."));
        assert!(set.is_ellipsis(".."));
        assert!(set.is_ellipsis("…"));
        assert!(set.is_ellipsis("?…"));
        assert!(!set.is_ellipsis("."));
        assert!(!set.is_ellipsis("?!"));
    }

    #[test]
    fn test_context_rules() {
        let set = english();

        let text = "Wait... What happened?";
        assert_eq!(
            set.evaluate(&context(text, 4, 7)),
            BoundaryDecision::Accept(BoundaryKind::Weak)
        );

        let text = "Wait... what happened?";
        assert_eq!(set.evaluate(&context(text, 4, 7)), BoundaryDecision::Reject);
    }

    #[test]
    fn test_exception_wins_over_context() {
        let set = english();
        let text = "Well, um... Maybe later.";
        assert_eq!(set.evaluate(&context(text, 8, 11)), BoundaryDecision::Reject);
    }

    #[test]
    fn test_default_applies_without_matching_rule() {
        let set = EllipsisSet::new(vec!["…".to_string()], false, &[], &[]).unwrap();
        let text = "それは…";
        assert_eq!(
            set.evaluate(&context(text, 9, text.len())),
            BoundaryDecision::Reject
        );
    }

    #[test]
    fn test_exception_window_respects_char_boundaries() {
        let set = english();
        let text = "日本語のテキストです。まあ… Next";
        let start = text.find('…').unwrap();
        let ctx = context(text, start, start + '…'.len_utf8());
        assert_eq!(set.evaluate(&ctx), BoundaryDecision::Accept(BoundaryKind::Weak));
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(EllipsisSet::new(vec![], true, &[("sideways".to_string(), true)], &[]).is_err());
        assert!(EllipsisSet::new(vec![], true, &[], &[("(".to_string(), true)]).is_err());
    }
}
