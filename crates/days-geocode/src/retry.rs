//! Retry with linear back-off for the search endpoint.
//!
//! The upstream is rate-limited, so attempts are strictly sequential and the
//! wait grows by one step per failed attempt. Malformed bodies are not
//! retried: the same request would return the same body.

use std::future::Future;
use std::time::Duration;

use crate::error::GeocodeError;

/// Returns `true` for transport failures and non-2xx statuses.
pub(crate) fn is_retriable(err: &GeocodeError) -> bool {
    match err {
        GeocodeError::Http(_) | GeocodeError::UnexpectedStatus { .. } => true,
        GeocodeError::Deserialize { .. } | GeocodeError::InvalidEndpoint { .. } => false,
    }
}

/// Runs `operation` up to `max_attempts` times in total.
///
/// Back-off schedule with `backoff_step_ms = 1_000` and `max_attempts = 3`:
///
/// | Attempt | Sleep before next attempt |
/// |---------|---------------------------|
/// | 1       | 1 000 ms                  |
/// | 2       | 2 000 ms                  |
/// | 3       | none, last error returned |
///
/// A `max_attempts` of zero behaves like one.
pub(crate) async fn retry_linear<T, F, Fut>(
    max_attempts: u32,
    backoff_step_ms: u64,
    mut operation: F,
) -> Result<T, GeocodeError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, GeocodeError>>,
{
    let mut attempt = 1u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_attempts {
                    return Err(err);
                }
                let delay_ms = backoff_step_ms.saturating_mul(u64::from(attempt));
                tracing::warn!(
                    attempt,
                    max_attempts,
                    delay_ms,
                    error = %err,
                    "geocoder transient error, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
#[path = "retry_test.rs"]
mod tests;
