// crates/domain/src/aggregate.rs
use std::collections::HashMap;

use zipf_shared_kernel::Occurrences;

use crate::tokenize::tokenize;

/// Running tally of word occurrences.
///
/// Keys are non-empty lowercase words as produced by the tokenizer; counts
/// are always at least one. The tally is mutated only during accumulation
/// and consumed when converted into a ranked sequence.
#[derive(Debug, Clone, Default)]
pub struct WordTally {
    counts: HashMap<String, Occurrences>,
}

impl WordTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize `line` and increment the count of every produced word.
    pub fn update(&mut self, line: &str) {
        for word in tokenize(line) {
            *self.counts.entry(word).or_default() += Occurrences::new(1);
        }
    }

    /// Fold a sequence of lines into a tally. O(total words).
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tally = Self::new();
        for line in lines {
            tally.update(line.as_ref());
        }
        tally
    }

    /// Total number of occurrences across all words.
    pub fn total(&self) -> Occurrences {
        self.counts.values().sum()
    }

    /// Count recorded for `word`, zero if absent.
    pub fn get(&self, word: &str) -> Occurrences {
        self.counts.get(word).copied().unwrap_or_default()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub(crate) fn into_inner(self) -> HashMap<String, Occurrences> {
        self.counts
    }
}
