//! Pure word-frequency transformations.
//!
//! The pipeline is a linear pass over owned in-memory data:
//! [`tokenize`] splits lines into lowercase words, [`aggregate`] folds them
//! into a tally, [`rank`] orders and length-filters the tally, and
//! [`normalize`] attaches percentage shares. File boundaries live in
//! `zipf_infra`; nothing here touches the filesystem.

#![allow(clippy::multiple_crate_versions)]

pub mod aggregate;
pub mod model;
pub mod normalize;
pub mod rank;
pub mod tokenize;

pub use aggregate::WordTally;
pub use model::{NormalizedEntry, RankedEntry};
pub use normalize::normalize;
pub use rank::{SortOrder, filter_min_length, rank};
pub use tokenize::{DELIMITERS, tokenize};
