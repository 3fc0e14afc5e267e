// crates/shared-kernel/src/value_objects/counts.rs
use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// Number of files folded into an aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileCount(u64);

impl FileCount {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn increment(&mut self) {
        *self = self.saturating_add(1);
    }

    #[inline]
    #[must_use]
    pub const fn saturating_add(self, n: u64) -> Self {
        Self(self.0.saturating_add(n))
    }

    #[inline]
    #[must_use]
    pub const fn saturating_add_count(self, other: Self) -> Self {
        self.saturating_add(other.0)
    }
}

impl Default for FileCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for FileCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.saturating_add_count(rhs)
    }
}

impl AddAssign for FileCount {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.saturating_add_count(rhs);
    }
}

impl Sum for FileCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a FileCount> for FileCount {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<u64> for FileCount {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<FileCount> for u64 {
    fn from(count: FileCount) -> Self {
        count.value()
    }
}

impl PartialEq<u64> for FileCount {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

mod display {
    use std::fmt;

    use super::FileCount;

    impl fmt::Display for FileCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
