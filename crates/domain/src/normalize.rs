// crates/domain/src/normalize.rs
use zipf_shared_kernel::{DomainError, DomainResult, Occurrences, Percentage};

use crate::model::{NormalizedEntry, RankedEntry};

/// Attach each entry's percentage share of the total occurrence count.
///
/// `percentage = 100 × count / total`, where the total is taken over the
/// given (already ranked and filtered) sequence. A zero total has no
/// defined percentages and is rejected as [`DomainError::EmptyInput`].
pub fn normalize(entries: &[RankedEntry]) -> DomainResult<Vec<NormalizedEntry>> {
    let total: Occurrences = entries.iter().map(|entry| entry.count).sum();
    if total.is_zero() {
        return Err(DomainError::EmptyInput);
    }

    let total = total.value() as f64;
    Ok(entries
        .iter()
        .map(|entry| NormalizedEntry {
            word: entry.word.clone(),
            count: entry.count,
            percentage: Percentage::new(entry.count.value() as f64 / total * 100.0),
        })
        .collect())
}
