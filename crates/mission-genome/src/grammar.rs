//! Sentence shapes, indexed by the number of decoded codes.

use crate::corpus::Category;
use Category::*;

/// Pattern `n` has exactly `n` slots
pub const PATTERNS: [&[Category]; 12] = [
    &[],
    &[Verb],
    &[Preamble, Verb],
    &[Preamble, Verb, Conclusion],
    &[Preamble, Verb, Conjunction, Verb],
    &[Preamble, Verb, Conjunction, Verb, Noun],
    &[Preamble, Verb, Noun, Conjunction, Verb, Noun],
    &[Preamble, Verb, Adjective, Noun, Conjunction, Verb, Noun],
    &[Preamble, Verb, Adjective, Noun, Conjunction, Verb, Adjective, Noun],
    &[Preamble, Adverb, Verb, Adjective, Noun, Conjunction, Verb, Adjective, Noun],
    &[Preamble, Adverb, Verb, Adjective, Noun, Conjunction, Adverb, Verb, Adjective, Noun],
    &[
        Preamble, Adverb, Verb, Adjective, Noun, Conjunction, Adverb, Verb, Adjective, Noun,
        Conclusion,
    ],
];

/// Largest slot count a sentence can have
pub const MAX_SLOTS: usize = PATTERNS.len() - 1;

/// Pattern for `num_codes` codes, capped at the longest pattern
pub fn pattern_for(num_codes: usize) -> &'static [Category] {
    PATTERNS[num_codes.min(MAX_SLOTS)]
}
