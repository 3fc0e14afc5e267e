// crates/usecase/src/orchestrator.rs
use std::thread::{self, Scope};

use crossbeam_channel::{Sender, unbounded};
use dirsizer_domain::SizeSummary;
use dirsizer_ports::{Context, Directory};
use dirsizer_shared_kernel::{ConfigurationError, FileSize, PermitError, Result};
use log::{debug, error, trace};

use crate::{
    config::SizerConfig,
    limiter::{PermitPool, TimedSemaphore},
};

/// What a traversal task hands to the aggregation loop.
type Partial = Result<SizeSummary>;

/// Computes the total size and file count of a directory tree.
///
/// Each admitted subdirectory runs on its own scoped thread while holding a
/// permit from a pool sized by [`SizerConfig::workers`]. Subdirectories that
/// cannot get a permit are walked inline by the task that found them.
#[derive(Debug, Clone, Default)]
pub struct DirSizer {
    config: SizerConfig,
}

impl DirSizer {
    pub fn new(config: SizerConfig) -> Self {
        Self { config }
    }

    pub fn with_workers(workers: usize) -> Self {
        Self::new(SizerConfig::with_workers(workers))
    }

    pub fn set_workers_limit(&mut self, workers: usize) {
        self.config.workers = workers;
    }

    pub fn config(&self) -> &SizerConfig {
        &self.config
    }

    /// Sizes `root` with a fresh permit pool that lives for this call only.
    ///
    /// # Errors
    /// [`ConfigurationError::ZeroWorkers`] without touching `root` when the
    /// worker limit is zero; otherwise the first listing, stat, cancellation
    /// or permit-release error reported by any task.
    pub fn size(&self, ctx: &Context, root: &dyn Directory) -> Result<SizeSummary> {
        self.config.validate()?;
        let pool = TimedSemaphore::new(self.config.workers, self.config.acquire_timeout);
        self.size_with_pool(ctx, root, &pool)
    }

    /// Same as [`DirSizer::size`] but draws permits from `pool`.
    ///
    /// Every permit taken during the call is returned before it ends, on the
    /// error path too.
    ///
    /// # Errors
    /// See [`DirSizer::size`].
    pub fn size_with_pool(
        &self,
        ctx: &Context,
        root: &dyn Directory,
        pool: &dyn PermitPool,
    ) -> Result<SizeSummary> {
        if pool.capacity() == 0 {
            return Err(ConfigurationError::ZeroWorkers.into());
        }
        // The caller itself is the first worker.
        pool.acquire().map_err(|_| ConfigurationError::ZeroWorkers)?;

        debug!("sizing {} with {} workers", root.name(), pool.capacity());
        let run_ctx = ctx.child();
        let (tx, rx) = unbounded::<Partial>();

        let outcome = thread::scope(|scope| {
            let walker = Walker { scope, ctx: &run_ctx, pool };
            scope.spawn(move || walker.run_admitted(root, tx));

            // The channel disconnects once the last task drops its sender.
            let mut total = SizeSummary::empty();
            let mut first_error = None;
            let mut discarded = 0usize;
            for partial in &rx {
                if first_error.is_some() {
                    discarded += 1;
                    if let Err(err) = partial {
                        trace!("discarding error after abort: {err}");
                    }
                    continue;
                }
                match partial {
                    Ok(summary) => total += summary,
                    Err(err) => {
                        debug!("aborting {}: {err}", root.name());
                        run_ctx.cancel();
                        first_error = Some(err);
                    }
                }
            }
            if first_error.is_some() {
                debug!("drained {discarded} partials from {} after abort", root.name());
            }
            first_error.map_or(Ok(total), Err)
        });

        match &outcome {
            Ok(total) => debug!("sized {}: {total}", root.name()),
            Err(err) => debug!("sizing {} failed: {err}", root.name()),
        }
        outcome
    }
}

/// `ComputeSize`: sizes `root` using at most `workers` concurrent tasks.
///
/// # Errors
/// See [`DirSizer::size`].
pub fn compute_size(ctx: &Context, root: &dyn Directory, workers: usize) -> Result<SizeSummary> {
    DirSizer::with_workers(workers).size(ctx, root)
}

/// Per-call traversal state shared by every task spawned in `scope`.
#[derive(Clone, Copy)]
struct Walker<'scope, 'env: 'scope> {
    scope: &'scope Scope<'scope, 'env>,
    ctx: &'env Context,
    pool: &'env dyn PermitPool,
}

impl<'scope, 'env: 'scope> Walker<'scope, 'env> {
    /// Body of a task that owns a permit; gives the permit back when done.
    fn run_admitted(self, dir: &dyn Directory, tx: Sender<Partial>) {
        self.visit(dir, &tx);
        if let Err(err) = self.pool.release() {
            error!("permit bookkeeping broken after {}: {err}", dir.name());
            emit(&tx, Err(err.into()));
        }
    }

    fn visit(self, dir: &dyn Directory, tx: &Sender<Partial>) {
        let listing = match dir.list(self.ctx) {
            Ok(listing) => listing,
            Err(err) => {
                emit(tx, Err(err));
                return;
            }
        };

        for sub in listing.dirs {
            self.descend(sub, tx);
        }

        let mut partial = SizeSummary::empty();
        for file in &listing.files {
            match file.size(self.ctx) {
                Ok(bytes) => partial.add_file(FileSize::new(bytes)),
                Err(err) => emit(tx, Err(err)),
            }
        }
        emit(tx, Ok(partial));
    }

    /// Spawns a task for `dir` if a permit is free, otherwise walks it inline.
    fn descend(self, dir: Box<dyn Directory>, tx: &Sender<Partial>) {
        // Skipped subtrees must fail the run.
        if let Err(err) = self.ctx.check() {
            trace!("skipping {}: {err}", dir.name());
            emit(tx, Err(err));
            return;
        }
        match self.pool.acquire() {
            Ok(()) => {
                trace!("spawning task for {}", dir.name());
                let tx = tx.clone();
                self.scope.spawn(move || self.run_admitted(dir.as_ref(), tx));
            }
            Err(PermitError::NoPermitAvailable { .. }) => {
                trace!("no permit free, walking {} inline", dir.name());
                self.visit(dir.as_ref(), tx);
            }
            Err(err) => emit(tx, Err(err.into())),
        }
    }
}

fn emit(tx: &Sender<Partial>, partial: Partial) {
    // The receiver outlives every task in the scope.
    if tx.send(partial).is_err() {
        error!("result channel closed while tasks were still running");
    }
}
