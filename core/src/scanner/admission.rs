//! Admission control: a counting permit pool that caps probes in flight.

use std::sync::Arc;

use tokio::sync::{AcquireError, OwnedSemaphorePermit, Semaphore};

/// Shared permit pool. Cloning hands out another handle to the same pool.
#[derive(Debug, Clone)]
pub struct AdmissionController {
    permits: Arc<Semaphore>,
    limit: usize,
}

/// A held slot. Dropping it returns the slot to the pool, so every exit path
/// of a worker, unwinding included, releases exactly once.
#[derive(Debug)]
#[must_use = "the slot is released as soon as the permit is dropped"]
pub struct Permit {
    _permit: OwnedSemaphorePermit,
}

impl Permit {
    pub fn release(self) {}
}

impl AdmissionController {
    /// Creates a pool of `limit` permits; a limit of 0 is treated as 1.
    pub fn new(limit: usize) -> Self {
        let limit: usize = limit.max(1);
        Self {
            permits: Arc::new(Semaphore::new(limit)),
            limit,
        }
    }

    /// Waits for a free slot. Waiters are not served in any guaranteed order.
    ///
    /// Fails only if the pool was closed, which the orchestrator never does.
    pub async fn acquire(&self) -> Result<Permit, AcquireError> {
        let permit: OwnedSemaphorePermit = self.permits.clone().acquire_owned().await?;
        Ok(Permit { _permit: permit })
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
