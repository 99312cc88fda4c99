use super::{RawLock, FREE, HELD};
use std::hint::spin_loop;
use std::sync::atomic::{AtomicU32, Ordering::Relaxed};

/// The deliberately racy variant: `acquire` reads the state and, when
/// it observes [`FREE`], writes [`HELD`] as a second, separate
/// operation. Two threads can both observe [`FREE`] and both enter the
/// critical section. Included as the benchmark's negative control;
/// never a real lock.
#[derive(Debug, Default)]
pub struct UnsyncLock {
    state: AtomicU32,
}

impl UnsyncLock {
    /// A fresh lock in the [`FREE`] state.
    pub fn new() -> Self {
        Self {
            state: AtomicU32::new(FREE),
        }
    }
}

impl RawLock for UnsyncLock {
    fn acquire(&self) {
        loop {
            // Check-then-store, not a compare-and-swap: the window
            // between the two operations is the defect under study.
            if self.state.load(Relaxed) == FREE {
                self.state.store(HELD, Relaxed);
                return;
            }
            spin_loop();
        }
    }

    fn release(&self) {
        self.state.store(FREE, Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncontended_acquire_release() {
        let lock = UnsyncLock::new();
        lock.acquire();
        assert_eq!(lock.state.load(Relaxed), HELD);
        lock.release();
        assert_eq!(lock.state.load(Relaxed), FREE);
    }
}
