// crates/usecase/src/limiter.rs
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, bounded};
use dirsizer_shared_kernel::PermitError;

/// Bounded pool of execution slots.
///
/// Neither operation blocks for longer than the pool's timeout, so callers
/// must be prepared to carry on without a permit.
pub trait PermitPool: Send + Sync {
    /// Claims one permit.
    ///
    /// # Errors
    /// [`PermitError::NoPermitAvailable`] if every permit stays taken for the
    /// whole timeout.
    fn acquire(&self) -> Result<(), PermitError>;

    /// Returns a previously acquired permit.
    ///
    /// # Errors
    /// [`PermitError::IllegalRelease`] if nothing is held, which means more
    /// releases than acquisitions happened.
    fn release(&self) -> Result<(), PermitError>;

    /// Total number of permits, held or free.
    fn capacity(&self) -> usize;

    /// Permits that can be acquired right now without waiting.
    fn available(&self) -> usize;
}

/// Counting semaphore backed by a bounded channel.
///
/// Every held permit is one message sitting in the channel: acquiring sends,
/// releasing receives. A pool of capacity zero never grants anything.
#[derive(Debug, Clone)]
pub struct TimedSemaphore {
    held_tx: Sender<()>,
    held_rx: Receiver<()>,
    capacity: usize,
    timeout: Duration,
}

impl TimedSemaphore {
    pub fn new(capacity: usize, timeout: Duration) -> Self {
        let (held_tx, held_rx) = bounded(capacity);
        Self { held_tx, held_rx, capacity, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn held(&self) -> usize {
        self.held_tx.len()
    }
}

impl PermitPool for TimedSemaphore {
    fn acquire(&self) -> Result<(), PermitError> {
        // A zero-capacity channel is a rendezvous; it must not pair with a
        // stray release on another thread.
        if self.capacity == 0 {
            return Err(PermitError::NoPermitAvailable { timeout: self.timeout });
        }
        self.held_tx
            .send_timeout((), self.timeout)
            .map_err(|_| PermitError::NoPermitAvailable { timeout: self.timeout })
    }

    fn release(&self) -> Result<(), PermitError> {
        if self.capacity == 0 {
            return Err(PermitError::IllegalRelease { timeout: self.timeout });
        }
        self.held_rx
            .recv_timeout(self.timeout)
            .map_err(|_| PermitError::IllegalRelease { timeout: self.timeout })
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn available(&self) -> usize {
        self.capacity.saturating_sub(self.held())
    }
}
