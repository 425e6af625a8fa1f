use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Backoff policy for retrying startup connections
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_retries: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    /// Delay multiplier applied after each failed attempt
    pub backoff_factor: u32,
    /// Randomise each delay to 50-100% of its nominal value
    pub use_jitter: bool,
}

impl RetryConfig {
    /// 3 retries, 100ms initial delay, doubling up to 5s, with jitter.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay_ms: u64) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    pub fn with_max_delay(mut self, delay_ms: u64) -> Self {
        self.max_delay_ms = delay_ms;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }

    fn next_delay(&self, current_ms: u64) -> u64 {
        current_ms
            .saturating_mul(u64::from(self.backoff_factor))
            .min(self.max_delay_ms)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
            backoff_factor: 2,
            use_jitter: true,
        }
    }
}

/// Retry an async operation with exponential backoff.
///
/// The operation runs at most `max_retries + 1` times; the last error is
/// returned when every attempt fails.
///
/// ```ignore
/// use database::common::{retry_with_backoff, RetryConfig};
///
/// let db = retry_with_backoff(
///     || database::postgres::connect(&url),
///     RetryConfig::new().with_max_retries(5),
/// )
/// .await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 0;
    let mut delay = config.initial_delay_ms;

    loop {
        match operation().await {
            Ok(result) => {
                if attempt > 0 {
                    debug!(attempt, "Operation succeeded after retrying");
                }
                return Ok(result);
            }
            Err(e) => {
                attempt += 1;

                if attempt > config.max_retries {
                    warn!(attempts = attempt, error = %e, "Operation failed, giving up");
                    return Err(e);
                }

                let sleep_ms = if config.use_jitter {
                    apply_jitter(delay)
                } else {
                    delay
                };

                debug!(
                    attempt,
                    max_retries = config.max_retries,
                    error = %e,
                    sleep_ms,
                    "Operation failed, retrying"
                );

                tokio::time::sleep(Duration::from_millis(sleep_ms)).await;
                delay = config.next_delay(delay);
            }
        }
    }
}

/// Scales `delay` to a pseudo-random value in [50%, 100%).
fn apply_jitter(delay: u64) -> u64 {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let percent = 50 + RandomState::new().hash_one(std::time::SystemTime::now()) % 50;
    delay.saturating_mul(percent) / 100
}

/// [`retry_with_backoff`] with the default [`RetryConfig`].
pub async fn retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    retry_with_backoff(operation, RetryConfig::default()).await
}
