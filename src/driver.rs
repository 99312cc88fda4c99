//! The benchmark driver: one run per (lock kind, thread count) pair.

use crate::config::BenchConfig;
use crate::counter::SharedCounter;
use crate::error::{Error, Result};
use crate::lock::LockKind;
use crate::partition::partition_range;
use crate::stats::{LatencySnapshot, Metrics};
use crate::worker::{run_worker, WorkerReport};
use std::hint::black_box;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// The observable result of one benchmark run.
#[derive(Debug)]
pub struct RunOutcome {
    /// Lock variant the run used.
    pub kind: LockKind,
    /// Number of worker threads.
    pub threads: usize,
    /// Wall-clock time of the join phase.
    pub elapsed: Duration,
    /// Final accumulator value.
    pub sum: u64,
    /// Closed-form sum of the configured range.
    pub expected: u64,
    /// Per-worker reports, ordered by worker id.
    pub workers: Vec<WorkerReport>,
    /// Sampled acquire latencies, when sampling was enabled.
    pub latency: Option<LatencySnapshot>,
}

impl RunOutcome {
    /// Whether the final sum matches the closed form.
    pub fn is_correct(&self) -> bool {
        self.sum == self.expected
    }
}

#[cfg(target_os = "linux")]
fn pin_thread_to_core(core_id: usize) {
    unsafe {
        let mut cpuset: libc::cpu_set_t = std::mem::zeroed();
        libc::CPU_SET(core_id, &mut cpuset);
        let result = libc::sched_setaffinity(
            0, // current thread
            std::mem::size_of::<libc::cpu_set_t>(),
            &cpuset,
        );
        if result != 0 {
            eprintln!(
                "failed to pin thread {} to core {}",
                thread::current().name().unwrap_or("unknown"),
                core_id
            );
        }
    }
}

/// Execute one benchmark run: fresh lock and counter, `threads` workers
/// over the configured range, join-phase timing.
///
/// If any worker fails to spawn, no further workers are spawned, the
/// already-running ones are joined, and the run surfaces
/// [`Error::Spawn`]. There is no retry.
pub fn run_once(config: &BenchConfig, kind: LockKind, threads: usize) -> Result<RunOutcome> {
    let chunks = partition_range(config.range_start, config.range_end, threads);
    let lock = kind.build(config);
    let counter = Arc::new(SharedCounter::new());
    let metrics = Arc::new(Metrics::new());
    let (tx, rx) = crossbeam_channel::unbounded();

    let mut handles = Vec::with_capacity(threads);
    for (id, chunk) in chunks.into_iter().enumerate() {
        let lock = lock.clone();
        let counter = counter.clone();
        let metrics = metrics.clone();
        let tx = tx.clone();
        let sample_every = config.latency_sample_every;
        let pin_workers = config.pin_workers;
        let name = format!("{}-{}", config.thread_name_prefix, id);

        let mut builder = thread::Builder::new().name(name);
        if let Some(stack_size) = config.stack_size {
            builder = builder.stack_size(stack_size);
        }

        let spawned = builder.spawn(move || {
            #[cfg(target_os = "linux")]
            if pin_workers {
                pin_thread_to_core(id % num_cpus::get());
            }

            run_worker(id, chunk, lock, counter, metrics, sample_every, tx);
        });

        match spawned {
            Ok(handle) => handles.push(handle),
            Err(e) => {
                // Abort the run: no more spawns, wait out the workers
                // already running, report nothing for this entry.
                drop(rx);
                for handle in handles {
                    let _ = handle.join();
                }
                return Err(Error::spawn(format!(
                    "worker {} of {} ({} run): {}",
                    id,
                    threads,
                    kind.label(),
                    e
                )));
            }
        }
    }
    drop(tx);

    let join_started = Instant::now();
    for handle in handles {
        let _ = handle.join();
    }
    let elapsed = join_started.elapsed();

    let mut workers: Vec<WorkerReport> = rx.into_iter().collect();
    workers.sort_by_key(|w| w.id);

    let snapshot = metrics.snapshot();
    Ok(RunOutcome {
        kind,
        threads,
        elapsed,
        sum: counter.get(),
        expected: expected_sum(config.range_start, config.range_end),
        workers,
        latency: (snapshot.samples > 0).then_some(snapshot),
    })
}

/// Run the full sweep: every enabled lock kind at every configured
/// thread count, in order. Failed runs are reported to stderr and
/// skipped; the second return value counts them.
pub fn run_sweep(config: &BenchConfig) -> (Vec<RunOutcome>, usize) {
    let mut outcomes = Vec::new();
    let mut failed = 0usize;

    for &kind in &config.kinds {
        for &threads in &config.thread_counts {
            match run_once(config, kind, threads) {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    failed += 1;
                    eprintln!(
                        "[lockmark] {} with {} threads aborted: {}",
                        kind.label(),
                        threads,
                        e
                    );
                }
            }
        }
    }

    (outcomes, failed)
}

/// Time a single-threaded summation of the configured range, the
/// comparison line for every multi-threaded run.
pub fn sequential_baseline(config: &BenchConfig) -> (Duration, u64) {
    let started = Instant::now();
    let mut sum = 0u64;
    for i in config.range_start..=config.range_end {
        sum = sum.wrapping_add(black_box(i));
    }
    (started.elapsed(), sum)
}

/// Closed-form sum of the inclusive range `[start, end]`.
pub fn expected_sum(start: u64, end: u64) -> u64 {
    let span = (end - start + 1) as u128;
    (span * (start as u128 + end as u128) / 2) as u64
}
