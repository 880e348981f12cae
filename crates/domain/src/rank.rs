// crates/domain/src/rank.rs
use std::cmp::Ordering;

use crate::aggregate::WordTally;
use crate::model::RankedEntry;

/// Requested ordering of ranked entries by count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl From<bool> for SortOrder {
    #[inline]
    fn from(desc: bool) -> Self {
        if desc { Self::Descending } else { Self::Ascending }
    }
}

/// Convert a tally into entries ordered by count.
///
/// Entries with equal counts are ordered by word, ascending, regardless of
/// the requested order. Map iteration order never leaks into the result, so
/// ranking is deterministic across runs and platforms.
pub fn rank(tally: WordTally, order: SortOrder) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = tally
        .into_inner()
        .into_iter()
        .map(|(word, count)| RankedEntry { word, count })
        .collect();
    entries.sort_by(|a, b| {
        order
            .apply(a.count.cmp(&b.count))
            .then_with(|| a.word.cmp(&b.word))
    });
    entries
}

/// Keep only entries whose word has at least `min_length` characters.
///
/// Relative order of survivors is preserved. `min_length` of 1 keeps
/// everything the tokenizer can produce; the filter is idempotent.
pub fn filter_min_length(entries: Vec<RankedEntry>, min_length: usize) -> Vec<RankedEntry> {
    entries
        .into_iter()
        .filter(|entry| entry.word.chars().count() >= min_length)
        .collect()
}
