// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "zipf", version, about = "Word-frequency statistics for plain-text files")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Count word frequencies and persist them with percentage shares
    Count {
        /// Plain-text input file
        input: PathBuf,

        /// Destination counts file (word count percentage, one per line)
        output: PathBuf,

        /// Drop words shorter than this many characters
        #[arg(default_value_t = 1)]
        min_length: usize,

        /// Rank by ascending count instead of descending
        #[arg(long)]
        ascending: bool,
    },

    /// Render a counts file as a labelled bar chart
    Plot {
        /// Counts file produced by `zipf count`
        counts: PathBuf,

        /// `show` or `ascii` print to stdout; anything else is an output file path
        target: String,

        /// Number of leading entries to draw
        #[arg(default_value_t = 10)]
        limit: usize,
    },

    /// Print the first and second ranked counts and their ratio per file
    Ratio {
        /// Counts files to report on
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}
