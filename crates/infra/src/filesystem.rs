// crates/infra/src/filesystem.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use dirsizer_ports::{Context, Directory, File, Listing};
use dirsizer_shared_kernel::{Result, TraversalError};
use log::trace;

/// Options shared by every handle derived from one root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalOptions {
    /// Count symlinked files with the size of their target.
    ///
    /// Symlinked directories are never descended, so traversal cannot loop.
    pub follow_links: bool,
}

/// A directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalDirectory {
    path: PathBuf,
    options: LocalOptions,
}

impl LocalDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_options(path, LocalOptions::default())
    }

    pub fn with_options(path: impl Into<PathBuf>, options: LocalOptions) -> Self {
        Self { path: path.into(), options }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn listing_error(&self, source: std::io::Error) -> TraversalError {
        TraversalError::Listing { path: self.path.clone(), source }
    }
}

impl Directory for LocalDirectory {
    fn list(&self, ctx: &Context) -> Result<Listing> {
        ctx.check()?;
        let entries = fs::read_dir(&self.path).map_err(|e| self.listing_error(e))?;

        let mut listing = Listing::default();
        for entry in entries {
            let entry = entry.map_err(|e| self.listing_error(e))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| self.listing_error(e))?;

            if file_type.is_dir() {
                listing.dirs.push(Box::new(Self::with_options(path, self.options)));
            } else if file_type.is_file() {
                listing.files.push(Box::new(LocalFile::new(path, self.options)));
            } else if file_type.is_symlink() && self.options.follow_links {
                // Only links that resolve to regular files are counted.
                match fs::metadata(&path) {
                    Ok(meta) if meta.is_file() => {
                        listing.files.push(Box::new(LocalFile::new(path, self.options)));
                    }
                    Ok(_) => trace!("not descending into linked directory {}", path.display()),
                    Err(e) => trace!("dangling link {}: {e}", path.display()),
                }
            } else {
                trace!("skipping special entry {}", path.display());
            }
        }
        Ok(listing)
    }

    fn name(&self) -> String {
        self.path.display().to_string()
    }
}

/// A regular file (or a followed link to one) on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
    options: LocalOptions,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>, options: LocalOptions) -> Self {
        Self { path: path.into(), options }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl File for LocalFile {
    fn size(&self, ctx: &Context) -> Result<u64> {
        ctx.check()?;
        let meta = if self.options.follow_links {
            fs::metadata(&self.path)
        } else {
            fs::symlink_metadata(&self.path)
        };
        meta.map(|m| m.len())
            .map_err(|source| TraversalError::Stat { path: self.path.clone(), source }.into())
    }
}
