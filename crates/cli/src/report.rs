// crates/cli/src/report.rs
//! Top-two ratio report across counts files.
//!
//! A corpus obeying Zipf's law has a first/second ratio near 2, which is
//! what this report exists to eyeball.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use zipf_domain::NormalizedEntry;
use zipf_infra::load_word_counts;
use zipf_shared_kernel::{ApplicationError, ErrorContext, Occurrences, Result};

const HEADER: &str = "Book\tFirst\tSecond\tRatio";

/// Build the tab-separated report: a header row, then one row per counts
/// file with its stem, first and second ranked counts, and their ratio to
/// two decimal places.
pub fn ratio_report(paths: &[PathBuf]) -> Result<String> {
    let mut out = String::new();
    let _ = writeln!(out, "{HEADER}");

    for path in paths {
        let entries = load_word_counts(path)
            .with_context(|| format!("ratio report for '{}'", path.display()))?;
        let (first, second) =
            top_two(&entries).ok_or_else(|| ApplicationError::NotEnoughEntries {
                path: path.clone(),
                found: entries.len(),
                need: 2,
            })?;

        let ratio = first.value() as f64 / second.value() as f64;
        let _ = writeln!(out, "{}\t{first}\t{second}\t{ratio:.2}", book_name(path));
    }
    Ok(out)
}

/// The first two counts in record order, if there are at least two.
fn top_two(entries: &[NormalizedEntry]) -> Option<(Occurrences, Occurrences)> {
    match entries {
        [first, second, ..] => Some((first.count, second.count)),
        _ => None,
    }
}

fn book_name(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| path.display().to_string(), |stem| stem.to_string_lossy().into_owned())
}
