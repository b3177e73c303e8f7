//! Runtime implementation of language rules
//!
//! Bridges a parsed [`LanguageConfig`] and the [`LanguageRules`] interface
//! the segmenter calls.

use std::ops::Range;

use crate::language::{
    config::LanguageConfig,
    interface::{
        BoundaryContext, BoundaryDecision, BoundaryKind, DotRole, EnclosureInfo, LanguageRules,
    },
    tables::*,
};

/// Language rules compiled from a TOML configuration
#[derive(Debug, Clone)]
pub struct ConfigurableLanguageRules {
    code: String,
    name: String,

    terminators: TermTable,
    enclosures: EncTable,
    name_prefixes: Trie,
    abbreviations: Trie,
    ellipsis: EllipsisSet,
    suppress: Suppresser,
    sentence_starters: SentenceStarterTable,
}

impl ConfigurableLanguageRules {
    /// Compile rules from a configuration
    pub fn from_config(config: &LanguageConfig) -> Result<Self, String> {
        config.validate()?;

        let terminators = TermTable::new(config.terminators.chars.iter().copied());

        let pairs: Vec<(char, char, bool)> = config
            .enclosures
            .pairs
            .iter()
            .map(|p| (p.open, p.close, p.symmetric))
            .collect();
        let enclosures = EncTable::new(&pairs);

        // Titles are matched exactly so "rep." or "gen." at a sentence end
        // still splits
        let name_prefixes = Trie::from_categories(config.abbreviations.prefixes(), true);
        let abbreviations = Trie::from_categories(config.abbreviations.others(), false);

        let context_rules: Vec<(String, bool)> = config
            .ellipsis
            .context_rules
            .iter()
            .map(|r| (r.condition.clone(), r.boundary))
            .collect();
        let exceptions: Vec<(String, bool)> = config
            .ellipsis
            .exceptions
            .iter()
            .map(|e| (e.regex.clone(), e.boundary))
            .collect();
        let ellipsis = EllipsisSet::new(
            config.ellipsis.patterns.clone(),
            config.ellipsis.treat_as_boundary,
            &context_rules,
            &exceptions,
        )?;

        let fast: Vec<FastPatternSpec> = config
            .suppression
            .fast_patterns
            .iter()
            .map(|p| FastPatternSpec {
                ch: p.char,
                line_start: p.line_start,
                before: p.before.clone(),
                after: p.after.clone(),
            })
            .collect();
        let regexes: Vec<String> = config
            .suppression
            .regex_patterns
            .iter()
            .map(|p| p.pattern.clone())
            .collect();
        let suppress = Suppresser::new(&fast, &regexes)?;

        let sentence_starters =
            SentenceStarterTable::from_words(config.sentence_starters.categories.values().flatten());

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            terminators,
            enclosures,
            name_prefixes,
            abbreviations,
            ellipsis,
            suppress,
            sentence_starters,
        })
    }

    /// Parse, validate and compile TOML text
    pub fn from_toml(source: &str) -> Result<Self, String> {
        let config = LanguageConfig::from_toml(source)?;
        Self::from_config(&config)
    }

    fn period_decision(&self, ctx: &BoundaryContext<'_>) -> BoundaryDecision {
        if self.dot_role(ctx.prev_char, ctx.next_char) == DotRole::DecimalDot {
            return BoundaryDecision::Reject;
        }

        // "example.com", "e.g.x": a period needs room after it
        if ctx.following.is_some_and(|ch| !ch.is_whitespace()) {
            return BoundaryDecision::Reject;
        }

        let rest = ctx.rest();

        // "Dr. Smith": only a known sentence starter ends the sentence
        if self.name_prefixes.find_abbrev(ctx.text, ctx.run.start) {
            return if !self.sentence_starters.is_empty()
                && self.sentence_starters.starts_sentence(rest)
            {
                BoundaryDecision::Accept(BoundaryKind::Strong)
            } else {
                BoundaryDecision::Reject
            };
        }

        // "5 km. Bob ran": any capitalized word does
        if self.abbreviations.find_abbrev(ctx.text, ctx.run.start) {
            return if SentenceStarterTable::capital_follows(rest)
                || self.sentence_starters.starts_sentence(rest)
            {
                BoundaryDecision::Accept(BoundaryKind::Strong)
            } else {
                BoundaryDecision::Reject
            };
        }

        BoundaryDecision::Accept(BoundaryKind::Strong)
    }
}

impl LanguageRules for ConfigurableLanguageRules {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn is_terminator_char(&self, ch: char) -> bool {
        self.terminators.contains(ch)
    }

    #[inline]
    fn enclosure_info(&self, ch: char) -> Option<EnclosureInfo> {
        self.enclosures.get(ch)
    }

    #[inline]
    fn dot_role(&self, prev: Option<char>, next: Option<char>) -> DotRole {
        classify_dot(prev, next)
    }

    fn boundary_decision(&self, ctx: &BoundaryContext<'_>) -> BoundaryDecision {
        let run = ctx.run_text();

        if self.ellipsis.is_ellipsis(run) {
            return self.ellipsis.evaluate(ctx);
        }

        if run == "." {
            return self.period_decision(ctx);
        }

        BoundaryDecision::Accept(BoundaryKind::Strong)
    }

    fn should_suppress(&self, text: &str, pos: usize, ch: char) -> bool {
        self.suppress.should_suppress(text, pos, ch)
    }

    fn suppressed_spans(&self, text: &str) -> Vec<Range<usize>> {
        self.suppress.spans(text)
    }

    fn max_enclosure_pairs(&self) -> usize {
        self.enclosures.pair_count()
    }
}
