// crates/cli/src/app.rs
use std::path::{Path, PathBuf};

use zipf_domain::{SortOrder, WordTally, filter_min_length, normalize, rank};
use zipf_infra::{FileWriter, load_text, load_word_counts, save_word_counts};
use zipf_shared_kernel::{ApplicationError, ErrorContext, InfrastructureError, Result};

use crate::args::Command;
use crate::chart;
use crate::report;

/// Where `zipf plot` sends its rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlotTarget {
    /// Interactive display; on a terminal this is stdout.
    Show,
    /// Text bars on stdout.
    Ascii,
    /// Anything else is an output file path.
    File(PathBuf),
}

impl From<&str> for PlotTarget {
    fn from(target: &str) -> Self {
        match target {
            "show" => Self::Show,
            "ascii" => Self::Ascii,
            other => Self::File(PathBuf::from(other)),
        }
    }
}

pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Count { input, output, min_length, ascending } => {
            count_words(&input, &output, min_length, SortOrder::from(!ascending))
        }
        Command::Plot { counts, target, limit } => {
            plot_counts(&counts, &PlotTarget::from(target.as_str()), limit)
        }
        Command::Ratio { files } => {
            print!("{}", report::ratio_report(&files)?);
            Ok(())
        }
    }
}

/// Run the full pipeline: load text, tally words, rank, length-filter,
/// normalize to percentages, and persist atomically.
pub fn count_words(
    input: &Path,
    output: &Path,
    min_length: usize,
    order: SortOrder,
) -> Result<()> {
    let lines =
        load_text(input).with_context(|| format!("counting words in '{}'", input.display()))?;

    let tally = WordTally::from_lines(&lines);
    let ranked = filter_min_length(rank(tally, order), min_length);
    let normalized = normalize(&ranked)
        .with_context(|| format!("counting words in '{}'", input.display()))?;

    save_word_counts(output, &normalized)
        .with_context(|| format!("saving word counts to '{}'", output.display()))
}

/// Load a counts file and render its leading entries as a bar chart.
pub fn plot_counts(counts: &Path, target: &PlotTarget, limit: usize) -> Result<()> {
    let entries = load_word_counts(counts)
        .with_context(|| format!("plotting '{}'", counts.display()))?;
    if entries.is_empty() {
        return Err(ApplicationError::NotEnoughEntries {
            path: counts.to_path_buf(),
            found: 0,
            need: 1,
        }
        .into());
    }

    let rendered = chart::render(&entries, limit, chart::SCREEN_WIDTH);
    match target {
        PlotTarget::Show | PlotTarget::Ascii => print!("{rendered}"),
        PlotTarget::File(path) => {
            FileWriter::atomic_write(path, rendered.as_bytes()).map_err(|source| {
                InfrastructureError::FileWrite { path: path.clone(), source }
            })?;
        }
    }
    Ok(())
}
