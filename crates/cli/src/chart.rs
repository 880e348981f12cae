// crates/cli/src/chart.rs
//! ASCII bar-chart rendering for counts files.

use zipf_domain::NormalizedEntry;

/// Columns available to one chart row (label, gap, and bar).
pub const SCREEN_WIDTH: usize = 80;

const GAP: usize = 2;
const BAR_SYMBOL: &str = "#";

/// Render the first `limit` entries as labelled bars, one row per entry.
///
/// Labels are right-padded to a common width; bar lengths are proportional
/// to the entry count relative to the largest shown count, scaled to the
/// width remaining after the label column.
pub fn render(entries: &[NormalizedEntry], limit: usize, screen_width: usize) -> String {
    let shown = &entries[..entries.len().min(limit)];
    let raw_labels: Vec<&str> = shown.iter().map(|e| e.word.as_str()).collect();
    let values: Vec<u64> = shown.iter().map(|e| e.count.value()).collect();

    let labels = typeset_labels(&raw_labels, GAP);
    let label_width = labels.first().map_or(0, |l| l.chars().count());
    let bars = ascii_bars(&values, screen_width.saturating_sub(GAP + label_width));

    labels
        .iter()
        .zip(&bars)
        .map(|(label, bar)| format!("{label}{bar}\n"))
        .collect()
}

/// Right-pad every label to the width of the longest, plus `gap` spaces,
/// so all rows start their bars in the same column.
fn typeset_labels(labels: &[&str], gap: usize) -> Vec<String> {
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    labels
        .iter()
        .map(|label| format!("{label:<width$}{}", " ".repeat(gap)))
        .collect()
}

/// One bar per value, `max_len` symbols for the largest value and the rest
/// scaled proportionally from zero.
fn ascii_bars(values: &[u64], max_len: usize) -> Vec<String> {
    let maximum = values.iter().copied().max().unwrap_or(0);
    if maximum == 0 {
        return vec![String::new(); values.len()];
    }

    values
        .iter()
        .map(|&value| {
            let proportion = value as f64 / maximum as f64;
            let len = (proportion * max_len as f64).round() as usize;
            BAR_SYMBOL.repeat(len)
        })
        .collect()
}
