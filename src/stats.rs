//! Sampled acquire-latency collection for a single benchmark run.

use hdrhistogram::Histogram;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Collects sampled lock-acquire latencies for one run.
#[derive(Debug)]
pub struct Metrics {
    samples: AtomicU64,
    latency_histogram: RwLock<Histogram<u64>>,
}

impl Metrics {
    /// A fresh, empty collector.
    pub fn new() -> Self {
        // 3 significant figures, up to 60 s in nanoseconds: sleep-based
        // backoff can stretch a single acquire far past the spin range.
        let histogram =
            Histogram::new_with_max(60_000_000_000, 3).expect("failed to create histogram");

        Self {
            samples: AtomicU64::new(0),
            latency_histogram: RwLock::new(histogram),
        }
    }

    /// Record one sampled acquire duration, in nanoseconds.
    pub fn record_acquire(&self, duration_ns: u64) {
        self.samples.fetch_add(1, Ordering::Relaxed);

        // try_write: a contended histogram drops the sample rather
        // than stalling the worker mid-benchmark.
        if let Some(mut hist) = self.latency_histogram.try_write() {
            let _ = hist.record(duration_ns);
        }
    }

    /// Point-in-time view of what has been recorded so far.
    pub fn snapshot(&self) -> LatencySnapshot {
        let histogram = self.latency_histogram.read();

        LatencySnapshot {
            samples: self.samples.load(Ordering::Relaxed),
            p50_ns: histogram.value_at_quantile(0.50),
            p99_ns: histogram.value_at_quantile(0.99),
            max_ns: histogram.max(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of the sampled acquire latencies.
#[derive(Debug, Clone, Copy)]
pub struct LatencySnapshot {
    /// Number of sampled acquires (recorded or dropped).
    pub samples: u64,
    /// Median sampled latency in nanoseconds.
    pub p50_ns: u64,
    /// 99th-percentile sampled latency in nanoseconds.
    pub p99_ns: u64,
    /// Largest sampled latency in nanoseconds.
    pub max_ns: u64,
}
