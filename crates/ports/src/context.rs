// crates/ports/src/context.rs
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};

use dirsizer_shared_kernel::{CancellationError, Result};

/// Cancellation token with an optional deadline.
///
/// Clones share state. A context derived with [`Context::child`] is cancelled
/// whenever its parent is, but cancelling the child leaves the parent alone.
#[derive(Debug, Clone, Default)]
pub struct Context {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    cancelled: AtomicBool,
    deadline: Option<Instant>,
    parent: Option<Context>,
}

impl Context {
    /// A context that is never cancelled unless [`Context::cancel`] is called.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            inner: Arc::new(Inner { deadline: Some(deadline), ..Inner::default() }),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    pub fn child(&self) -> Self {
        Self {
            inner: Arc::new(Inner {
                cancelled: AtomicBool::new(false),
                deadline: None,
                parent: Some(self.clone()),
            }),
        }
    }

    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::Release);
    }

    /// Earliest deadline along the parent chain.
    pub fn deadline(&self) -> Option<Instant> {
        let parent = self.inner.parent.as_ref().and_then(Self::deadline);
        match (self.inner.deadline, parent) {
            (Some(own), Some(inherited)) => Some(own.min(inherited)),
            (own, inherited) => own.or(inherited),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.state().is_some()
    }

    /// Returns the reason this context is done, if it is.
    ///
    /// # Errors
    /// `Cancelled` after an explicit cancel anywhere up the chain,
    /// `DeadlineExceeded` once the deadline has passed.
    pub fn check(&self) -> Result<()> {
        match self.state() {
            Some(reason) => Err(reason.into()),
            None => Ok(()),
        }
    }

    fn state(&self) -> Option<CancellationError> {
        if self.inner.cancelled.load(Ordering::Acquire) {
            return Some(CancellationError::Cancelled);
        }
        if self.inner.deadline.is_some_and(|d| Instant::now() >= d) {
            return Some(CancellationError::DeadlineExceeded);
        }
        self.inner.parent.as_ref().and_then(Self::state)
    }
}
