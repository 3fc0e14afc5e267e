// crates/shared-kernel/src/value_objects/file_info.rs
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// Byte size of a file or of an aggregated subtree.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileSize(u64);

impl FileSize {
    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Adds without wrapping; totals beyond `u64::MAX` stay at `u64::MAX`.
    #[inline]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}
impl From<FileSize> for u64 {
    fn from(size: FileSize) -> Self {
        size.bytes()
    }
}

impl Add for FileSize {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl AddAssign for FileSize {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.saturating_add(rhs);
    }
}

impl Sum for FileSize {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl PartialEq<u64> for FileSize {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.to_human())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl FileSize {
    /// Returns a base-2 human readable representation (KiB, MiB, GiB, TiB).
    pub fn to_human(self) -> String {
        const KIB: f64 = 1024.0;
        let bytes = self.bytes();
        if bytes < 1024 {
            return format!("{bytes} B");
        }

        let kib = bytes as f64 / KIB;
        if kib < KIB {
            return format!("{kib:.1} KiB");
        }

        let mib = kib / KIB;
        if mib < KIB {
            return format!("{mib:.1} MiB");
        }

        let gib = mib / KIB;
        if gib < KIB {
            return format!("{gib:.1} GiB");
        }

        let tib = gib / KIB;
        format!("{tib:.1} TiB")
    }
}
