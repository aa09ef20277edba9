//! Background Task Pool
//!
//! Runs the node's fire-and-forget work (ingestion of accepted submissions,
//! gossip deliveries) as tracked tasks instead of detached spawns.
//!
//! ## Responsibilities
//! - **Bounding**: at most `max_in_flight` units run at once and at most
//!   `max_queued` more wait for a permit. Beyond that `spawn` refuses the unit.
//! - **Tracking**: every unit is registered with a `TaskTracker`, so the node knows what is in flight.
//! - **Shutdown**: `shutdown` waits, with a deadline, for everything tracked to finish.

use super::types::PoolError;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio_util::task::TaskTracker;

pub const DEFAULT_MAX_IN_FLIGHT: usize = 64;
pub const DEFAULT_MAX_QUEUED: usize = 1024;

/// Cheap to clone; clones share the same tracker and permits.
#[derive(Clone)]
pub struct TaskPool {
    tracker: TaskTracker,
    /// Running units. Never closed.
    permits: Arc<Semaphore>,
    /// Running plus waiting units, taken without waiting at spawn time.
    slots: Arc<Semaphore>,
    max_in_flight: usize,
    max_queued: usize,
}

impl TaskPool {
    pub fn new(max_in_flight: usize) -> Self {
        Self::with_limits(max_in_flight, DEFAULT_MAX_QUEUED)
    }

    pub fn with_limits(max_in_flight: usize, max_queued: usize) -> Self {
        let max_in_flight = max_in_flight.max(1);
        Self {
            tracker: TaskTracker::new(),
            permits: Arc::new(Semaphore::new(max_in_flight)),
            slots: Arc::new(Semaphore::new(max_in_flight + max_queued)),
            max_in_flight,
            max_queued,
        }
    }

    /// Schedules `work` on the pool.
    ///
    /// Returns immediately. The unit is counted as in flight from this call
    /// until it completes, including the time spent waiting for a permit.
    /// Fails with `PoolError::Full` when `max_in_flight + max_queued` units
    /// are already pending; `work` is dropped unrun.
    /// Units may spawn further units; `shutdown` waits for those too.
    pub fn spawn<F>(&self, label: &'static str, work: F) -> Result<(), PoolError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let Ok(slot) = self.slots.clone().try_acquire_owned() else {
            return Err(PoolError::Full {
                label,
                capacity: self.capacity(),
            });
        };

        let permits = self.permits.clone();
        self.tracker.spawn(async move {
            let _slot = slot;
            let _permit = permits.acquire_owned().await;
            tracing::trace!("Running {} task", label);
            work.await;
        });

        Ok(())
    }

    /// Number of units spawned and not yet finished.
    pub fn in_flight(&self) -> usize {
        self.tracker.len()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight
    }

    pub fn max_queued(&self) -> usize {
        self.max_queued
    }

    /// Most units that can be pending at once.
    pub fn capacity(&self) -> usize {
        self.max_in_flight + self.max_queued
    }

    /// Waits for every tracked unit to finish, up to `timeout`.
    ///
    /// Returns `true` if the pool drained in time. Units still running after
    /// the deadline are left to the runtime.
    pub async fn shutdown(&self, timeout: Duration) -> bool {
        self.tracker.close();
        let pending = self.tracker.len();
        if pending > 0 {
            tracing::info!("Waiting for {} background tasks to finish", pending);
        }

        match tokio::time::timeout(timeout, self.tracker.wait()).await {
            Ok(()) => {
                tracing::debug!("Task pool drained");
                true
            }
            Err(_) => {
                tracing::warn!(
                    "Task pool did not drain within {:?}, {} tasks still running",
                    timeout,
                    self.tracker.len()
                );
                false
            }
        }
    }
}

impl Default for TaskPool {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IN_FLIGHT)
    }
}
