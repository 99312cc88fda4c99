use super::{RawLock, FREE, HELD};
use std::hint::spin_loop;
use std::sync::atomic::{
    AtomicU32,
    Ordering::{Acquire, Relaxed, Release},
};

/// Test-and-test-and-set: a plain load gates the compare-and-swap, so
/// a held lock is observed through shared cache reads and only a
/// [`FREE`] observation pays for an atomic write attempt.
#[derive(Debug, Default)]
pub struct TtasLock {
    state: AtomicU32,
}

impl TtasLock {
    /// A fresh lock in the [`FREE`] state.
    pub fn new() -> Self {
        Self {
            state: AtomicU32::new(FREE),
        }
    }
}

impl RawLock for TtasLock {
    fn acquire(&self) {
        loop {
            if self.state.load(Relaxed) == FREE
                && self
                    .state
                    .compare_exchange_weak(FREE, HELD, Acquire, Relaxed)
                    .is_ok()
            {
                return;
            }
            spin_loop();
        }
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
        let lock = Arc::new(TtasLock::new());
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
