//! Counts-file codec.
//!
//! One record per line, `word count percentage`, single-space separated.
//! Lines beginning with `#` are comments and skipped on load. Percentages
//! are written with six decimal places.

pub mod file_reader;
pub mod file_writer;

pub use file_reader::load_word_counts;
pub use file_writer::{FileWriter, save_word_counts};
