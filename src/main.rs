use lockmark::{driver, report, BenchConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = BenchConfig::default();
    if let Err(e) = config.validate() {
        eprintln!("[lockmark] invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    report::print_header(&config);

    let (elapsed, sum) = driver::sequential_baseline(&config);
    report::print_baseline(elapsed, sum);

    let mut failed = 0usize;
    for &kind in &config.kinds {
        report::print_section(kind);
        for &threads in &config.thread_counts {
            match driver::run_once(&config, kind, threads) {
                Ok(outcome) => report::print_run(&outcome),
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

    if failed > 0 {
        eprintln!("[lockmark] {failed} run(s) aborted");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
