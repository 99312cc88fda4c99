use super::{RawLock, FREE, HELD};
use std::sync::atomic::{
    AtomicU32,
    Ordering::{Acquire, Relaxed, Release},
};
use std::thread;
use std::time::Duration;

/// Doubling delay schedule for [`BackoffLock`].
///
/// Kept separate from the lock so the sequence itself is testable
/// without sleeping: the delay starts at `base`, doubles after every
/// failed attempt, and saturates at `cap`.
#[derive(Debug)]
pub struct BackoffDelay {
    current: Duration,
    cap: Duration,
}

impl BackoffDelay {
    /// A schedule starting at `base` and capped at `cap`.
    pub fn new(base: Duration, cap: Duration) -> Self {
        Self { current: base, cap }
    }

    /// The delay to sleep before the next attempt. Doubles the stored
    /// delay for the attempt after that, saturating at the cap.
    pub fn next(&mut self) -> Duration {
        let delay = self.current;
        self.current = (delay * 2).min(self.cap);
        delay
    }

    /// The delay the next call to [`next`](Self::next) will return.
    pub fn current(&self) -> Duration {
        self.current
    }
}

/// TTAS fast path plus exponential sleep between failed attempts.
/// Trades acquire latency for less cache-line traffic at high thread
/// counts. The schedule resets on every `acquire` call.
#[derive(Debug)]
pub struct BackoffLock {
    state: AtomicU32,
    base: Duration,
    cap: Duration,
}

impl BackoffLock {
    /// A fresh lock in the [`FREE`] state with the given schedule.
    pub fn new(base: Duration, cap: Duration) -> Self {
        Self {
            state: AtomicU32::new(FREE),
            base,
            cap,
        }
    }
}

impl RawLock for BackoffLock {
    fn acquire(&self) {
        let mut delay = BackoffDelay::new(self.base, self.cap);
        loop {
            if self.state.load(Relaxed) == FREE
                && self
                    .state
                    .compare_exchange_weak(FREE, HELD, Acquire, Relaxed)
                    .is_ok()
            {
                return;
            }
            thread::sleep(delay.next());
        }
    }

    fn release(&self) {
        self.state.store(FREE, Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_doubles_until_cap() {
        let base = Duration::from_micros(20);
        let cap = Duration::from_millis(1);
        let mut delay = BackoffDelay::new(base, cap);

        assert_eq!(delay.next(), Duration::from_micros(20));
        assert_eq!(delay.next(), Duration::from_micros(40));
        assert_eq!(delay.next(), Duration::from_micros(80));

        for _ in 0..20 {
            delay.next();
        }
        assert_eq!(delay.current(), cap);
        assert_eq!(delay.next(), cap);
    }

    #[test]
    fn schedule_is_non_decreasing_and_bounded() {
        let cap = Duration::from_millis(2);
        let mut delay = BackoffDelay::new(Duration::from_micros(30), cap);

        let mut prev = Duration::ZERO;
        for _ in 0..32 {
            let d = delay.next();
            assert!(d >= prev, "backoff delay shrank between attempts");
            assert!(d <= cap, "backoff delay exceeded the ceiling");
            prev = d;
        }
    }

    #[test]
    fn contended_acquire_eventually_succeeds() {
        use std::sync::Arc;

        let lock = Arc::new(BackoffLock::new(
            Duration::from_micros(1),
            Duration::from_micros(64),
        ));

        lock.acquire();
        let contender = lock.clone();
        let handle = thread::spawn(move || {
            contender.acquire();
            contender.release();
        });

        // Let the contender hit the slow path at least once.
        thread::sleep(Duration::from_millis(1));
        lock.release();
        handle.join().unwrap();
    }
}
