use crate::error::{Error, Result};
use crate::lock::LockKind;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub range_start: u64,
    pub range_end: u64,
    pub thread_counts: Vec<usize>,
    pub kinds: Vec<LockKind>,
    pub backoff_base: Duration,
    pub backoff_cap: Duration,
    pub pin_workers: bool,
    pub stack_size: Option<usize>,
    pub thread_name_prefix: String,
    pub latency_sample_every: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            range_start: 1_000_000,
            range_end: 5_000_000,
            thread_counts: vec![2, 4, 8, 16, 32, 64],
            kinds: LockKind::ALL.to_vec(),
            backoff_base: Duration::from_micros(20),
            backoff_cap: Duration::from_secs(1),
            pin_workers: false,
            stack_size: Some(2 * 1024 * 1024),
            thread_name_prefix: "lockmark-worker".to_string(),
            latency_sample_every: 1024,
        }
    }
}

impl BenchConfig {
    pub fn builder() -> BenchConfigBuilder {
        BenchConfigBuilder::new()
    }

    pub fn validate(&self) -> Result<()> {
        if self.range_start > self.range_end {
            return Err(Error::config("range_start must not exceed range_end"));
        }

        if self.thread_counts.is_empty() {
            return Err(Error::config("thread-count sweep must not be empty"));
        }

        for &n in &self.thread_counts {
            if n == 0 {
                return Err(Error::config("thread counts must be > 0"));
            }
            if n > 1024 {
                return Err(Error::config("thread count too large (max 1024)"));
            }
        }

        let widest = *self.thread_counts.iter().max().unwrap_or(&1);
        if self.range_len() < widest as u64 {
            return Err(Error::config(
                "range must hold at least one integer per thread of the widest sweep entry",
            ));
        }

        if self.kinds.is_empty() {
            return Err(Error::config("at least one lock kind must be enabled"));
        }

        if self.backoff_base.is_zero() {
            return Err(Error::config("backoff_base must be > 0"));
        }
        if self.backoff_base > self.backoff_cap {
            return Err(Error::config("backoff_base must not exceed backoff_cap"));
        }

        Ok(())
    }

    pub fn range_len(&self) -> u64 {
        self.range_end - self.range_start + 1
    }
}

#[derive(Debug, Default)]
pub struct BenchConfigBuilder {
    config: BenchConfig,
}

impl BenchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: BenchConfig::default(),
        }
    }

    pub fn range(mut self, start: u64, end: u64) -> Self {
        self.config.range_start = start;
        self.config.range_end = end;
        self
    }

    pub fn thread_counts(mut self, counts: Vec<usize>) -> Self {
        self.config.thread_counts = counts;
        self
    }

    pub fn kinds(mut self, kinds: Vec<LockKind>) -> Self {
        self.config.kinds = kinds;
        self
    }

    pub fn backoff(mut self, base: Duration, cap: Duration) -> Self {
        self.config.backoff_base = base;
        self.config.backoff_cap = cap;
        self
    }

    pub fn pin_workers(mut self, pin: bool) -> Self {
        self.config.pin_workers = pin;
        self
    }

    pub fn stack_size(mut self, size: usize) -> Self {
        self.config.stack_size = Some(size);
        self
    }

    pub fn thread_name_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.config.thread_name_prefix = prefix.into();
        self
    }

    pub fn latency_sample_every(mut self, every: usize) -> Self {
        self.config.latency_sample_every = every;
        self
    }

    pub fn build(self) -> Result<BenchConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(BenchConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_inverted_range() {
        let result = BenchConfig::builder().range(10, 1).build();
        assert!(result.is_err());
    }

    #[test]
    fn rejects_empty_sweep() {
        let result = BenchConfig::builder().thread_counts(vec![]).build();
        assert!(result.is_err());
    }

    #[test]
    fn rejects_zero_threads() {
        let result = BenchConfig::builder().thread_counts(vec![2, 0]).build();
        assert!(result.is_err());
    }

    #[test]
    fn rejects_range_shorter_than_sweep() {
        let result = BenchConfig::builder()
            .range(1, 10)
            .thread_counts(vec![2, 16])
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn rejects_inverted_backoff() {
        let result = BenchConfig::builder()
            .backoff(Duration::from_millis(10), Duration::from_millis(1))
            .build();
        assert!(result.is_err());
    }
}
