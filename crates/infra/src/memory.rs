// crates/infra/src/memory.rs
//! In-memory directory trees with injectable failures and latency.
//!
//! Used by tests and benchmarks to drive the sizer without touching disk.

use std::{
    io,
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
    time::Duration,
};

use dirsizer_ports::{Context, Directory, File, Listing};
use dirsizer_shared_kernel::{Result, TraversalError};

/// Call counters shared by every handle reachable from one root.
#[derive(Debug, Default)]
pub struct IoProbe {
    lists: AtomicUsize,
    stats: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl IoProbe {
    pub fn lists(&self) -> usize {
        self.lists.load(Ordering::SeqCst)
    }

    pub fn stats(&self) -> usize {
        self.stats.load(Ordering::SeqCst)
    }

    /// Highest number of list/stat calls that were running at the same time.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    fn enter(&self, counter: &AtomicUsize) -> InFlight<'_> {
        counter.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        InFlight(self)
    }
}

struct InFlight<'a>(&'a IoProbe);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone)]
struct MemoryFile {
    name: String,
    size: u64,
    error: Option<io::ErrorKind>,
}

/// Builder-style in-memory directory.
///
/// ```
/// use dirsizer_infra::memory::MemoryDir;
///
/// let tree = MemoryDir::new("root")
///     .file("a", 10)
///     .dir(MemoryDir::new("sub").file("b", 5));
/// assert_eq!(tree.total_size(), 15);
/// ```
#[derive(Debug)]
pub struct MemoryDir {
    name: String,
    dirs: Vec<Arc<MemoryDir>>,
    files: Vec<MemoryFile>,
    listing_error: Option<io::ErrorKind>,
    latency: Option<Duration>,
    probe: Arc<IoProbe>,
}

impl MemoryDir {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dirs: Vec::new(),
            files: Vec::new(),
            listing_error: None,
            latency: None,
            probe: Arc::default(),
        }
    }

    #[must_use]
    pub fn file(mut self, name: impl Into<String>, size: u64) -> Self {
        self.files.push(MemoryFile { name: name.into(), size, error: None });
        self
    }

    #[must_use]
    pub fn failing_file(mut self, name: impl Into<String>, kind: io::ErrorKind) -> Self {
        self.files.push(MemoryFile { name: name.into(), size: 0, error: Some(kind) });
        self
    }

    #[must_use]
    pub fn dir(mut self, child: MemoryDir) -> Self {
        self.dirs.push(Arc::new(child));
        self
    }

    /// Makes listing this directory fail with `kind`.
    #[must_use]
    pub fn fail_listing(mut self, kind: io::ErrorKind) -> Self {
        self.listing_error = Some(kind);
        self
    }

    /// Delays every list/stat call in this subtree by `latency`.
    #[must_use]
    pub fn latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Counters for calls made through this directory when used as a root.
    pub fn probe(&self) -> Arc<IoProbe> {
        Arc::clone(&self.probe)
    }

    /// Sum of all file sizes in the subtree, failing files excluded.
    pub fn total_size(&self) -> u64 {
        let own: u64 = self.files.iter().filter(|f| f.error.is_none()).map(|f| f.size).sum();
        own + self.dirs.iter().map(|d| d.total_size()).sum::<u64>()
    }

    /// Number of files in the subtree, failing files excluded.
    pub fn total_count(&self) -> u64 {
        let own = self.files.iter().filter(|f| f.error.is_none()).count() as u64;
        own + self.dirs.iter().map(|d| d.total_count()).sum::<u64>()
    }

    fn list_at(&self, at: &Walk, ctx: &Context) -> Result<Listing> {
        let _in_flight = at.probe.enter(&at.probe.lists);
        at.pause(ctx)?;
        if let Some(kind) = self.listing_error {
            return Err(TraversalError::Listing {
                path: at.path.clone(),
                source: io::Error::from(kind),
            }
            .into());
        }

        let dirs = self
            .dirs
            .iter()
            .map(|child| {
                Box::new(MemoryDirHandle {
                    node: Arc::clone(child),
                    at: at.descend(&child.name, child.latency),
                }) as Box<dyn Directory>
            })
            .collect();
        let files = self
            .files
            .iter()
            .map(|file| {
                Box::new(MemoryFileHandle {
                    file: file.clone(),
                    at: at.descend(&file.name, None),
                }) as Box<dyn File>
            })
            .collect();
        Ok(Listing::new(dirs, files))
    }

    fn root_walk(&self) -> Walk {
        Walk {
            path: PathBuf::from(&self.name),
            latency: self.latency,
            probe: Arc::clone(&self.probe),
        }
    }
}

impl Directory for MemoryDir {
    fn list(&self, ctx: &Context) -> Result<Listing> {
        self.list_at(&self.root_walk(), ctx)
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

/// Position of a handle inside the tree plus the settings it inherited.
#[derive(Debug, Clone)]
struct Walk {
    path: PathBuf,
    latency: Option<Duration>,
    probe: Arc<IoProbe>,
}

impl Walk {
    fn descend(&self, name: &str, latency: Option<Duration>) -> Self {
        Self {
            path: self.path.join(name),
            latency: latency.or(self.latency),
            probe: Arc::clone(&self.probe),
        }
    }

    fn pause(&self, ctx: &Context) -> Result<()> {
        ctx.check()?;
        if let Some(latency) = self.latency {
            thread::sleep(latency);
            ctx.check()?;
        }
        Ok(())
    }
}

struct MemoryDirHandle {
    node: Arc<MemoryDir>,
    at: Walk,
}

impl Directory for MemoryDirHandle {
    fn list(&self, ctx: &Context) -> Result<Listing> {
        self.node.list_at(&self.at, ctx)
    }

    fn name(&self) -> String {
        self.at.path.display().to_string()
    }
}

struct MemoryFileHandle {
    file: MemoryFile,
    at: Walk,
}

impl MemoryFileHandle {
    fn path(&self) -> &Path {
        &self.at.path
    }
}

impl File for MemoryFileHandle {
    fn size(&self, ctx: &Context) -> Result<u64> {
        let _in_flight = self.at.probe.enter(&self.at.probe.stats);
        self.at.pause(ctx)?;
        match self.file.error {
            Some(kind) => Err(TraversalError::Stat {
                path: self.path().to_path_buf(),
                source: io::Error::from(kind),
            }
            .into()),
            None => Ok(self.file.size),
        }
    }
}
