//! The shared accumulator every worker in a run mutates.

use std::sync::atomic::{AtomicU64, Ordering::Relaxed};

/// One 64-bit accumulator shared by all workers of a benchmark run.
///
/// [`add`](Self::add) is a split load + store rather than a
/// `fetch_add`: serialization must come from the lock under test, and
/// the racy variant must be able to lose updates. `Relaxed` suffices
/// because the atomic lock variants order the pair through their
/// acquire/release edges, and the driver reads the final value only
/// after joining every worker.
#[derive(Debug, Default)]
pub struct SharedCounter {
    value: AtomicU64,
}

impl SharedCounter {
    /// A fresh counter at zero.
    pub fn new() -> Self {
        Self {
            value: AtomicU64::new(0),
        }
    }

    /// Read-modify-write in two halves; exclusivity is the caller's
    /// job.
    pub fn add(&self, n: u64) {
        let current = self.value.load(Relaxed);
        self.value.store(current.wrapping_add(n), Relaxed);
    }

    /// Current value.
    pub fn get(&self) -> u64 {
        self.value.load(Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_sequentially() {
        let counter = SharedCounter::new();
        for i in 1..=10 {
            counter.add(i);
        }
        assert_eq!(counter.get(), 55);
    }
}
