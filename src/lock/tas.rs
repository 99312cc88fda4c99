use super::{RawLock, FREE, HELD};
use std::sync::atomic::{
    AtomicU32,
    Ordering::{Acquire, Relaxed, Release},
};

/// Test-and-set: every acquire iteration issues a full
/// compare-and-swap attempt with no cheaper pre-check, so contending
/// threads keep pulling the cache line into exclusive ownership.
#[derive(Debug, Default)]
pub struct TasLock {
    state: AtomicU32,
}

impl TasLock {
    /// A fresh lock in the [`FREE`] state.
    pub fn new() -> Self {
        Self {
            state: AtomicU32::new(FREE),
        }
    }
}

impl RawLock for TasLock {
    fn acquire(&self) {
        while self
            .state
            .compare_exchange_weak(FREE, HELD, Acquire, Relaxed)
            .is_err()
        {}
    }

    fn release(&self) {
        self.state.store(FREE, Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::SharedCounter;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn serializes_concurrent_increments() {
        let lock = Arc::new(TasLock::new());
        let counter = Arc::new(SharedCounter::new());

        let mut handles = Vec::new();
        for _ in 0..8 {
            let lock = lock.clone();
            let counter = counter.clone();
            handles.push(thread::spawn(move || {
                for _ in 0..10_000 {
                    lock.acquire();
                    counter.add(1);
                    lock.release();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counter.get(), 8 * 10_000);
    }
}
