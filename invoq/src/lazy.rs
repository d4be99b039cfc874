//! One-time initialization primitive.

use futures::lock::Mutex;
use invoq_core::BoxError;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};

/// Guarantees a setup step runs at most once for a dispatcher instance.
///
/// The fast path is a lock-free flag read: once initialized, `ensure` returns
/// immediately with no synchronization cost. The slow path serializes callers
/// on a mutex and re-checks the flag under the lock, so racing first calls
/// agree on a single winner whose setup future runs.
///
/// A failed setup leaves the flag unset: the next caller re-attempts
/// initialization rather than finding the dispatcher permanently dead.
#[derive(Default)]
pub struct LazyInit {
    ready: AtomicBool,
    guard: Mutex<()>,
}

impl LazyInit {
    /// Create an uninitialized instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the setup step has completed successfully.
    pub fn is_initialized(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Run `run` if no prior call has completed it.
    ///
    /// Returns `Ok(())` without side effects when already initialized. The
    /// flag is only set after `run` succeeds; an `Err` is surfaced to exactly
    /// one caller (the one whose attempt ran) and leaves the instance
    /// retryable.
    pub async fn ensure<F, Fut>(&self, run: F) -> Result<(), BoxError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), BoxError>>,
    {
        if self.ready.load(Ordering::Acquire) {
            return Ok(());
        }

        let _guard = self.guard.lock().await;
        if self.ready.load(Ordering::Acquire) {
            return Ok(());
        }

        run().await?;
        self.ready.store(true, Ordering::Release);
        Ok(())
    }
}
