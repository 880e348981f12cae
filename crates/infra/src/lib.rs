// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod persistence;

pub use filesystem::load_text;
pub use persistence::{FileWriter, load_word_counts, save_word_counts};
