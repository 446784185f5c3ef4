//! Retry policy with exponential backoff.

use crate::error_code::ApiStatusCode;
use crate::{Error, Result};
use std::future::Future;
use tokio::time::Duration;

/// Configuration for retry logic
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Total attempts, first one included.
    pub max_attempts: u32,
    pub min_delay: Duration,
    pub max_delay: Duration,
    /// API status codes worth another attempt.
    pub retry_on_codes: Vec<ApiStatusCode>,
    /// Also retry transport failures (HTTP status, connection errors).
    pub retry_on_transport: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            min_delay: Duration::from_millis(2000),
            max_delay: Duration::from_millis(2000),
            retry_on_codes: vec![ApiStatusCode::Unauthorized],
            retry_on_transport: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Delay before retry number `attempt` (1-based): `min_delay * 2^(attempt-1)`, capped.
    fn backoff(&self, attempt: u32) -> Duration {
        let base = self.config.min_delay.as_millis() as u64;
        let cap = self.config.max_delay.as_millis() as u64;
        let shift = attempt.saturating_sub(1).min(16);
        let delay = base.saturating_mul(1u64 << shift).min(cap.max(base));
        Duration::from_millis(delay)
    }

    /// Returns the pause before the next attempt, or `None` to give up.
    ///
    /// `attempt` is the number of attempts already made.
    pub fn should_retry(&self, attempt: u32, error: &Error) -> Option<Duration> {
        if attempt >= self.config.max_attempts {
            return None;
        }
        let retryable = match error {
            Error::Api { code, .. } => self.config.retry_on_codes.contains(code),
            Error::Transport(_) => self.config.retry_on_transport,
            _ => false,
        };
        retryable.then(|| self.backoff(attempt))
    }

    /// Runs `op` until it succeeds, fails with a non-retryable error, or
    /// attempts run out. The last error is returned as is.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) => match self.should_retry(attempt, &e) {
                    Some(delay) => {
                        tracing::debug!(
                            attempt,
                            delay_ms = delay.as_millis() as u64,
                            error = %e,
                            "retrying itop call"
                        );
                        if !delay.is_zero() {
                            tokio::time::sleep(delay).await;
                        }
                    }
                    None => return Err(e),
                },
            }
        }
    }
}
