// crates/shared-kernel/src/value_objects/counts.rs
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Number of times a word occurred in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Occurrences(u64);

impl Occurrences {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for Occurrences {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Occurrences {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Occurrences {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Occurrences {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Occurrences> for Occurrences {
    fn sum<I: Iterator<Item = &'a Occurrences>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<u64> for Occurrences {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<Occurrences> for u64 {
    fn from(value: Occurrences) -> Self {
        value.value()
    }
}

/// Share of the total occurrence count, in the range 0.0..=100.0.
///
/// `Display` renders six decimal places, the precision the counts-file
/// codec commits to on disk.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Percentage {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Percentage> for f64 {
    fn from(value: Percentage) -> Self {
        value.value()
    }
}

mod display {
    use std::fmt;

    use super::{Occurrences, Percentage};

    impl fmt::Display for Occurrences {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }

    impl fmt::Display for Percentage {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:.6}", self.value())
        }
    }
}
