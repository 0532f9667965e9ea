use rand::Rng;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Distinguishes failures worth another attempt from those that are not.
#[derive(Debug)]
pub enum RetryError {
    /// Network issues, timeouts, server errors
    Retryable(anyhow::Error),
    /// Client errors and unparsable payloads
    NonRetryable(anyhow::Error),
}

impl RetryError {
    pub fn into_inner(self) -> anyhow::Error {
        match self {
            RetryError::Retryable(err) | RetryError::NonRetryable(err) => err,
        }
    }
}

impl From<reqwest::Error> for RetryError {
    fn from(err: reqwest::Error) -> Self {
        let server_error = err.status().is_some_and(|s| s.is_server_error());
        if server_error || err.is_timeout() || err.is_connect() || err.is_request() {
            RetryError::Retryable(err.into())
        } else {
            RetryError::NonRetryable(err.into())
        }
    }
}

pub struct RetryConfig {
    /// Maximum number of attempts per request.
    max_attempts: u32,
    /// Base delay for exponential backoff.
    base_delay_ms: u64,
    /// Maximum jitter added to the backoff delay, as a fraction of it (0.25 = ±25%).
    jitter_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        RetryConfig {
            max_attempts: 4,
            base_delay_ms: 2000,
            jitter_factor: 0.25,
        }
    }
}

pub async fn with_retry<F, Fut, T>(func: F, config: &RetryConfig) -> Result<T, RetryError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, RetryError>>,
{
    let mut attempt = 0;
    loop {
        match func().await {
            Ok(result) => return Ok(result),
            Err(RetryError::Retryable(err)) if attempt + 1 < config.max_attempts => {
                log::warn!("Retryable error: {:#}", err);
                let delay = backoff_with_jitter(attempt, config);
                log::warn!(
                    "Retry attempt {}/{} after {:?}",
                    attempt + 1,
                    config.max_attempts - 1,
                    delay
                );
                sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Exponential backoff (`base_delay * 2^attempt`) with ±`jitter_factor` jitter.
fn backoff_with_jitter(attempt: u32, config: &RetryConfig) -> Duration {
    let base_delay = config.base_delay_ms * 2u64.pow(attempt);
    let jitter_range = (base_delay as f64 * config.jitter_factor) as u64;
    let jitter = rand::rng().random_range(0..=jitter_range * 2) as i64 - jitter_range as i64;
    let delay_ms = (base_delay as i64 + jitter).max(0) as u64;
    Duration::from_millis(delay_ms)
}
