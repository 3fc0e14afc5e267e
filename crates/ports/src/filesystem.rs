// crates/ports/src/filesystem.rs
use std::fmt;

use dirsizer_shared_kernel::Result;

use crate::context::Context;

/// Immediate children of one directory.
#[derive(Default)]
pub struct Listing {
    pub dirs: Vec<Box<dyn Directory>>,
    pub files: Vec<Box<dyn File>>,
}

impl Listing {
    pub fn new(dirs: Vec<Box<dyn Directory>>, files: Vec<Box<dyn File>>) -> Self {
        Self { dirs, files }
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.files.is_empty()
    }
}

impl fmt::Debug for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listing")
            .field("dirs", &self.dirs.iter().map(|d| d.name()).collect::<Vec<_>>())
            .field("files", &self.files.len())
            .finish()
    }
}

/// Port for enumerating a directory.
///
/// Implementations should call [`Context::check`] before doing I/O so that a
/// cancelled traversal winds down quickly.
pub trait Directory: Send + Sync {
    fn list(&self, ctx: &Context) -> Result<Listing>;

    /// Label used in logs.
    fn name(&self) -> String;
}

/// Port for reading a file's size in bytes.
pub trait File: Send + Sync {
    fn size(&self, ctx: &Context) -> Result<u64>;
}
