pub mod counts;

pub use counts::{Occurrences, Percentage};
