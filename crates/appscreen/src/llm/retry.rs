//! Rate-limit-aware request wrapper with linear backoff.

use std::thread;
use std::time::Duration;

use crate::error::Result;

use super::provider::LlmProvider;

/// Retry budget and backoff schedule for rate-limited requests.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum retry attempts after the initial request.
    pub max_retries: u32,
    /// Base backoff duration; attempt n waits `base_backoff * (n + 1)`.
    pub base_backoff: Duration,
}

impl RetryPolicy {
    /// Create a policy from a retry count and base backoff seconds.
    pub fn new(max_retries: u32, base_backoff_secs: f64) -> Self {
        Self {
            max_retries,
            base_backoff: Duration::from_secs_f64(base_backoff_secs),
        }
    }

    /// Backoff delay after the given 0-based failed attempt.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_backoff * (attempt + 1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_backoff: Duration::from_secs(10),
        }
    }
}

/// Send one prompt, retrying rate-limit failures within the policy budget.
///
/// Only `ScreenError::RateLimited` is retried; every other error propagates
/// after a single attempt. Each computed backoff is reported through
/// `on_backoff` before the blocking sleep, so callers can surface cooldown
/// notices (and tests can observe the schedule).
pub fn send_with_retry(
    provider: &dyn LlmProvider,
    prompt: &str,
    policy: &RetryPolicy,
    on_backoff: &mut dyn FnMut(Duration),
) -> Result<String> {
    let mut attempt = 0;
    loop {
        match provider.generate(prompt) {
            Ok(text) => return Ok(text),
            Err(e) if e.is_rate_limit() && attempt < policy.max_retries => {
                let wait = policy.delay_for(attempt);
                on_backoff(wait);
                thread::sleep(wait);
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
