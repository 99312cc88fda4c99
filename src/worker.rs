//! The per-chunk worker task.

use crate::counter::SharedCounter;
use crate::lock::RawLock;
use crate::partition::WorkChunk;
use crate::stats::Metrics;
use crossbeam_channel::Sender;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Index of a worker within its run, assigned in chunk order.
pub type WorkerId = usize;

/// What a worker hands back to the driver when its chunk is done.
#[derive(Debug, Clone)]
pub struct WorkerReport {
    /// The worker's index within the run.
    pub id: WorkerId,
    /// Integers processed (the chunk length).
    pub items: u64,
    /// Wall-clock time spent on the chunk.
    pub elapsed: Duration,
}

/// Run one worker to completion: for every integer in the chunk,
/// acquire the lock, add the integer into the shared counter, release.
///
/// The loop shape is identical for all lock kinds; only the lock
/// behavior differs. When `sample_every` is non-zero, every
/// `sample_every`-th acquire is timed into `metrics`. The report send
/// is allowed to fail: the driver drops the receiver when it aborts a
/// run after a spawn failure.
pub(crate) fn run_worker(
    id: WorkerId,
    chunk: WorkChunk,
    lock: Arc<dyn RawLock>,
    counter: Arc<SharedCounter>,
    metrics: Arc<Metrics>,
    sample_every: usize,
    reports: Sender<WorkerReport>,
) {
    let started = Instant::now();
    let mut until_sample = sample_every;

    for i in chunk.start..=chunk.end {
        if sample_every != 0 {
            until_sample -= 1;
            if until_sample == 0 {
                until_sample = sample_every;
                let acquire_started = Instant::now();
                lock.acquire();
                metrics.record_acquire(acquire_started.elapsed().as_nanos() as u64);
                counter.add(i);
                lock.release();
                continue;
            }
        }

        lock.acquire();
        counter.add(i);
        lock.release();
    }

    let _ = reports.send(WorkerReport {
        id,
        items: chunk.len(),
        elapsed: started.elapsed(),
    });
}
