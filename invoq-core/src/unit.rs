//! Execution-unit identity.
//!
//! A [`UnitId`] names one independent thread of control. Context bindings are
//! keyed by it, so concurrent calls never observe each other's bound value.
//! Ids are plain values: a test can allocate a "child unit" with
//! [`UnitId::fresh`] and inherit into it explicitly, without spawning a thread.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_UNIT: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static CURRENT_UNIT: UnitId = UnitId::fresh();
}

/// Identity of an execution unit (a thread, task, or simulated worker).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnitId(u64);

impl UnitId {
    /// Allocate a process-unique id.
    pub fn fresh() -> Self {
        UnitId(NEXT_UNIT.fetch_add(1, Ordering::Relaxed))
    }

    /// The id of the calling thread, allocated on first use and stable for
    /// the thread's lifetime.
    pub fn current() -> Self {
        CURRENT_UNIT.with(|unit| *unit)
    }

    /// The raw numeric id.
    ///
    /// Intended for adapters that need to carry a unit across a boundary that
    /// only speaks in plain values (wire attributes, test arguments).
    pub fn as_raw(self) -> u64 {
        self.0
    }

    /// Rebuild an id from [`UnitId::as_raw`] output.
    pub fn from_raw(raw: u64) -> Self {
        UnitId(raw)
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
