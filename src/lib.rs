//! lockmark — spin-lock contention benchmark.
//!
//! Four mutual-exclusion strategies protect one shared accumulator: an
//! intentionally racy control, a test-and-set spin lock, a
//! test-and-test-and-set spin lock, and TTAS with exponential backoff.
//! The driver partitions an integer range deterministically across a
//! thread-count sweep, runs every variant to completion, and checks
//! the final sum against the closed-form expected value.
//!
//! # Quick Start
//!
//! ```no_run
//! use lockmark::{driver, BenchConfig, LockKind};
//!
//! let config = BenchConfig::default();
//! let outcome = driver::run_once(&config, LockKind::Ttas, 4).unwrap();
//! assert_eq!(outcome.sum, outcome.expected);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod config;
pub mod counter;
pub mod driver;
pub mod error;
pub mod lock;
pub mod partition;
pub mod report;
pub mod stats;
pub mod worker;

pub use config::{BenchConfig, BenchConfigBuilder};
pub use driver::{expected_sum, run_once, run_sweep, RunOutcome};
pub use error::{Error, Result};
pub use lock::{LockKind, RawLock};
