use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

use dirsizer_shared_kernel::{FileCount, FileSize};
use serde::{Deserialize, Serialize};

/// Total size and number of files of some part of a directory tree.
///
/// Partial summaries from independent traversal tasks are merged with `+`;
/// the merge is commutative and associative, so arrival order never matters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeSummary {
    pub size: FileSize,
    pub count: FileCount,
}

impl SizeSummary {
    pub const fn new(size: FileSize, count: FileCount) -> Self {
        Self { size, count }
    }

    pub const fn empty() -> Self {
        Self::new(FileSize::zero(), FileCount::zero())
    }

    /// Folds one successfully stat'd file into the summary.
    pub fn add_file(&mut self, size: FileSize) {
        self.size += size;
        self.count.increment();
    }

    pub fn is_empty(&self) -> bool {
        self.count.is_zero()
    }
}

impl Add for SizeSummary {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { size: self.size + rhs.size, count: self.count + rhs.count }
    }
}

impl AddAssign for SizeSummary {
    fn add_assign(&mut self, rhs: Self) {
        self.size += rhs.size;
        self.count += rhs.count;
    }
}

impl Sum for SizeSummary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::empty(), Add::add)
    }
}

impl FromIterator<FileSize> for SizeSummary {
    fn from_iter<I: IntoIterator<Item = FileSize>>(iter: I) -> Self {
        let mut summary = Self::empty();
        for size in iter {
            summary.add_file(size);
        }
        summary
    }
}

impl fmt::Display for SizeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{:#} in {} files", self.size, self.count)
        } else {
            write!(f, "{} bytes in {} files", self.size, self.count)
        }
    }
}
