//! The four mutual-exclusion strategies under study.
//!
//! All variants share one `AtomicU32` state cell with two logical
//! values, [`FREE`] and [`HELD`], behind the common [`RawLock`]
//! contract. None of them tracks which thread holds the lock: a
//! `release` from a non-holder is accepted and corrupts the exclusion
//! invariant. That misuse surface is part of the benchmark's subject
//! and is deliberately not papered over with an RAII guard.

mod backoff;
mod tas;
mod ttas;
mod unsync;

pub use backoff::{BackoffDelay, BackoffLock};
pub use tas::TasLock;
pub use ttas::TtasLock;
pub use unsync::UnsyncLock;

use crate::config::BenchConfig;
use std::sync::Arc;

/// Lock state: no thread inside the critical section.
pub const FREE: u32 = 0;
/// Lock state: some thread inside the critical section.
pub const HELD: u32 = 1;

/// Common acquire/release capability over one shared state cell.
pub trait RawLock: Send + Sync {
    /// Busy-wait until the calling thread has exclusive logical
    /// ownership of the protected state. Never fails; under finite
    /// work every call eventually returns.
    fn acquire(&self);

    /// Transition the state back to [`FREE`], observable by all other
    /// threads. Accepted from any thread, holder or not.
    fn release(&self);
}

/// The lock variants the benchmark sweeps over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockKind {
    /// Unsynchronized check-then-store; the negative control.
    Unsync,
    /// Test-and-set: bare compare-and-swap loop.
    Tas,
    /// Test-and-test-and-set: load-gated compare-and-swap.
    Ttas,
    /// TTAS with exponential sleep between failed attempts.
    Backoff,
}

impl LockKind {
    /// Every variant, in sweep order.
    pub const ALL: [LockKind; 4] = [
        LockKind::Unsync,
        LockKind::Tas,
        LockKind::Ttas,
        LockKind::Backoff,
    ];

    /// Stable label used in report lines and bench IDs.
    pub fn label(self) -> &'static str {
        match self {
            LockKind::Unsync => "unsync",
            LockKind::Tas => "tas",
            LockKind::Ttas => "ttas",
            LockKind::Backoff => "backoff",
        }
    }

    /// Construct a fresh lock of this kind in the [`FREE`] state.
    pub fn build(self, config: &BenchConfig) -> Arc<dyn RawLock> {
        match self {
            LockKind::Unsync => Arc::new(UnsyncLock::new()),
            LockKind::Tas => Arc::new(TasLock::new()),
            LockKind::Ttas => Arc::new(TtasLock::new()),
            LockKind::Backoff => {
                Arc::new(BackoffLock::new(config.backoff_base, config.backoff_cap))
            }
        }
    }
}
