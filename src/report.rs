//! Human-readable stdout reporting.

use crate::config::BenchConfig;
use crate::driver::RunOutcome;
use crate::lock::LockKind;
use std::time::Duration;

/// What is about to run, and on how many cores (reporting only — the
/// sweep never adapts to the machine).
pub fn print_header(config: &BenchConfig) {
    println!(
        "lockmark: range [{}, {}], sweep {:?}",
        config.range_start, config.range_end, config.thread_counts
    );
    println!("available parallelism: {} cores", num_cpus::get());
}

/// Section header for one lock kind's sweep.
pub fn print_section(kind: LockKind) {
    println!("\n=== {} ===", kind.label());
}

/// The single-threaded comparison line.
pub fn print_baseline(elapsed: Duration, sum: u64) {
    println!(
        "single thread time: {:.6}s  sum {}",
        elapsed.as_secs_f64(),
        sum
    );
}

/// One line per run; a second line with sampled acquire latencies when
/// sampling was enabled. A mismatch is an observable result, not an
/// error.
pub fn print_run(outcome: &RunOutcome) {
    let verdict = if outcome.is_correct() { "ok" } else { "MISMATCH" };
    println!(
        "{:>2} threads  time {:.6}s  sum {} ({})",
        outcome.threads,
        outcome.elapsed.as_secs_f64(),
        outcome.sum,
        verdict
    );

    if let Some(latency) = &outcome.latency {
        println!(
            "           acquire p50 {} ns  p99 {} ns  max {} ns  ({} samples)",
            latency.p50_ns, latency.p99_ns, latency.max_ns, latency.samples
        );
    }
}
