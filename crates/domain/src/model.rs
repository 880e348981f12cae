// crates/domain/src/model.rs
use serde::{Deserialize, Serialize};

use zipf_shared_kernel::{Occurrences, Percentage};

/// A (word, count) pair after sorting and length filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub word: String,
    pub count: Occurrences,
}

impl RankedEntry {
    pub fn new(word: impl Into<String>, count: impl Into<Occurrences>) -> Self {
        Self { word: word.into(), count: count.into() }
    }
}

/// A ranked entry plus its percentage share of the total occurrence count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedEntry {
    pub word: String,
    pub count: Occurrences,
    pub percentage: Percentage,
}

impl NormalizedEntry {
    pub fn new(
        word: impl Into<String>,
        count: impl Into<Occurrences>,
        percentage: impl Into<Percentage>,
    ) -> Self {
        Self {
            word: word.into(),
            count: count.into(),
            percentage: percentage.into(),
        }
    }
}
