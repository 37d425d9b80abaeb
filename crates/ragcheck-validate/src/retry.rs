//! Explicit retry policy for collaborator calls.
//!
//! Wraps each embed/search call site rather than decorating the
//! collaborators themselves: exponential backoff with jitter, bounded by
//! `max_retries`. Only transient errors (embedding, index, timeouts
//! reported as either) are retried; invalid input and config errors
//! surface immediately. Rate-limited embedding failures get a doubled
//! backoff step before the next attempt.

use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::warn;

use ragcheck_core::config::ValidationConfig;
use ragcheck_core::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_retries: u32,
    base_delay: Duration,
    multiplier: f64,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration, multiplier: f64) -> Self {
        Self { max_retries, base_delay, multiplier }
    }

    pub fn from_config(config: &ValidationConfig) -> Self {
        Self::new(
            config.max_retries,
            Duration::from_millis(config.retry_base_delay_ms),
            2.0,
        )
    }

    /// Run `op` up to `max_retries` times, sleeping between attempts.
    /// Exhausted retries return the last error observed.
    pub fn run<T>(&self, mut op: impl FnMut() -> Result<T>) -> Result<T> {
        let attempts = self.max_retries.max(1);
        let mut last_error: Option<Error> = None;

        for attempt in 0..attempts {
            match op() {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() => {
                    warn!(attempt = attempt + 1, attempts, error = %e, "retryable failure");
                    let rate_limited = e.is_rate_limited();
                    last_error = Some(e);
                    if attempt + 1 < attempts {
                        thread::sleep(self.delay_for(attempt, rate_limited));
                    }
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error
            .unwrap_or_else(|| Error::InvalidInput("retry ran zero attempts".to_string())))
    }

    fn delay_for(&self, attempt: u32, rate_limited: bool) -> Duration {
        let mut delay = self.base_delay.as_secs_f64() * self.multiplier.powi(attempt as i32);
        if rate_limited {
            delay *= 2.0;
        }
        let jitter = rand::rng().random_range(0.0..=delay.max(f64::MIN_POSITIVE) * 0.1);
        Duration::from_secs_f64(delay + jitter)
    }
}
