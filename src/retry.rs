//! Transport-level retry policy.
//!
//! The protocol never retries; a transport may. [`HttpTransport`] consults a
//! [`RetryStrategy`] for how long to wait and a [`RetryPredicate`] for
//! whether an attempt is worth repeating. The default is a single attempt.
//!
//! [`HttpTransport`]: crate::HttpTransport

use crate::response::RawResponse;
use crate::transport::TransportError;
use http::{header::RETRY_AFTER, HeaderMap, StatusCode};
use rand::Rng;
use std::time::{Duration, SystemTime};

/// The result of one transport attempt, as seen by a [`RetryPredicate`].
pub type AttemptOutcome<'a> = std::result::Result<&'a RawResponse, &'a TransportError>;

/// How long to wait between attempts, and how many to make.
///
/// # Examples
///
/// ```
/// use callwire::RetryStrategy;
/// use std::time::Duration;
///
/// let strategy = RetryStrategy::Linear {
///     delay: Duration::from_millis(250),
///     max_retries: 2,
/// };
///
/// assert_eq!(strategy.delay_for_attempt(1), Some(Duration::from_millis(250)));
/// assert_eq!(strategy.delay_for_attempt(3), None);
/// ```
#[derive(Debug, Clone, Default)]
pub enum RetryStrategy {
    /// Make exactly one attempt.
    #[default]
    None,

    /// Wait `initial_delay * 2^(attempt - 1)`, capped at `max_delay`.
    ExponentialBackoff {
        /// Delay before the first retry.
        initial_delay: Duration,
        /// Upper bound on any single delay.
        max_delay: Duration,
        /// Number of retries after the first attempt.
        max_retries: usize,
        /// Scale each delay by a random factor in `0.5..=1.0`.
        jitter: bool,
    },

    /// Wait the same delay before every retry.
    Linear {
        /// Delay between attempts.
        delay: Duration,
        /// Number of retries after the first attempt.
        max_retries: usize,
    },

    /// Caller-supplied schedule.
    Custom {
        /// Receives the number of the attempt that just failed (starting at 1)
        /// and returns the delay before the next one, or `None` to stop.
        delay_fn: fn(attempt: usize) -> Option<Duration>,
    },
}

impl RetryStrategy {
    /// Delay before retrying after `attempt` failed, or `None` when exhausted.
    pub fn delay_for_attempt(&self, attempt: usize) -> Option<Duration> {
        match self {
            RetryStrategy::None => None,
            RetryStrategy::ExponentialBackoff {
                initial_delay,
                max_delay,
                max_retries,
                jitter,
            } => {
                if attempt > *max_retries {
                    return None;
                }

                let exponent = u32::try_from(attempt.saturating_sub(1)).unwrap_or(u32::MAX);
                let multiplier = 2u32.saturating_pow(exponent);
                let delay = initial_delay.saturating_mul(multiplier).min(*max_delay);

                if *jitter {
                    let factor = rand::thread_rng().gen_range(0.5..=1.0);
                    Some(delay.mul_f64(factor))
                } else {
                    Some(delay)
                }
            }
            RetryStrategy::Linear { delay, max_retries } => {
                (attempt <= *max_retries).then_some(*delay)
            }
            RetryStrategy::Custom { delay_fn } => delay_fn(attempt),
        }
    }

    /// The maximum number of retries, when the strategy states one.
    pub fn max_retries(&self) -> Option<usize> {
        match self {
            RetryStrategy::None => Some(0),
            RetryStrategy::ExponentialBackoff { max_retries, .. } => Some(*max_retries),
            RetryStrategy::Linear { max_retries, .. } => Some(*max_retries),
            RetryStrategy::Custom { .. } => None,
        }
    }
}

/// Decides whether a transport attempt should be repeated.
///
/// # Examples
///
/// ```
/// use callwire::retry::{AttemptOutcome, RetryPredicate};
///
/// struct RetryOnBadGateway;
///
/// impl RetryPredicate for RetryOnBadGateway {
///     fn should_retry(&self, outcome: AttemptOutcome<'_>, _attempt: usize) -> bool {
///         matches!(outcome, Ok(response) if response.status.as_u16() == 502)
///     }
/// }
/// ```
pub trait RetryPredicate: Send + Sync {
    /// Returns `true` if the attempt numbered `attempt` (1-indexed) should be retried.
    fn should_retry(&self, outcome: AttemptOutcome<'_>, attempt: usize) -> bool;
}

/// Retry when no response was received.
#[derive(Debug, Clone, Copy)]
pub struct RetryOnConnectionFailure;

impl RetryPredicate for RetryOnConnectionFailure {
    fn should_retry(&self, outcome: AttemptOutcome<'_>, _attempt: usize) -> bool {
        outcome.is_err()
    }
}

/// Retry on `429 Too Many Requests`.
#[derive(Debug, Clone, Copy)]
pub struct RetryOnTooManyRequests;

impl RetryPredicate for RetryOnTooManyRequests {
    fn should_retry(&self, outcome: AttemptOutcome<'_>, _attempt: usize) -> bool {
        matches!(outcome, Ok(response) if response.status == StatusCode::TOO_MANY_REQUESTS)
    }
}

/// Retry on any 5xx status.
#[derive(Debug, Clone, Copy)]
pub struct RetryOnServerError;

impl RetryPredicate for RetryOnServerError {
    fn should_retry(&self, outcome: AttemptOutcome<'_>, _attempt: usize) -> bool {
        matches!(outcome, Ok(response) if response.status.is_server_error())
    }
}

/// Retry when any of the wrapped predicates would.
pub struct OrPredicate {
    predicates: Vec<Box<dyn RetryPredicate>>,
}

impl OrPredicate {
    /// Combines predicates with logical OR.
    pub fn new(predicates: Vec<Box<dyn RetryPredicate>>) -> Self {
        Self { predicates }
    }
}

impl RetryPredicate for OrPredicate {
    fn should_retry(&self, outcome: AttemptOutcome<'_>, attempt: usize) -> bool {
        self.predicates
            .iter()
            .any(|p| p.should_retry(outcome, attempt))
    }
}

/// Reads a `Retry-After` header given as seconds or as an HTTP date.
pub fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    let value = headers.get(RETRY_AFTER)?.to_str().ok()?.trim();

    if let Ok(seconds) = value.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }

    let at = httpdate::parse_http_date(value).ok()?;
    Some(at.duration_since(SystemTime::now()).unwrap_or(Duration::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn exponential_backoff_doubles_and_caps() {
        let strategy = RetryStrategy::ExponentialBackoff {
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_millis(350),
            max_retries: 4,
            jitter: false,
        };

        assert_eq!(strategy.delay_for_attempt(1), Some(Duration::from_millis(100)));
        assert_eq!(strategy.delay_for_attempt(2), Some(Duration::from_millis(200)));
        assert_eq!(strategy.delay_for_attempt(3), Some(Duration::from_millis(350)));
        assert_eq!(strategy.delay_for_attempt(5), None);
    }

    #[test]
    fn jitter_stays_within_half_to_full_delay() {
        let strategy = RetryStrategy::ExponentialBackoff {
            initial_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(1),
            max_retries: 1,
            jitter: true,
        };

        for _ in 0..50 {
            let delay = strategy.delay_for_attempt(1).unwrap();
            assert!(delay >= Duration::from_millis(100) && delay <= Duration::from_millis(200));
        }
    }

    #[test]
    fn no_strategy_never_retries() {
        assert_eq!(RetryStrategy::None.delay_for_attempt(1), None);
        assert_eq!(RetryStrategy::None.max_retries(), Some(0));
    }

    #[test]
    fn predicates_inspect_the_outcome() {
        let limited = RawResponse::new(StatusCode::TOO_MANY_REQUESTS, "");
        let unavailable = RawResponse::new(StatusCode::SERVICE_UNAVAILABLE, "");
        let failure = TransportError::new("connection reset");

        assert!(RetryOnTooManyRequests.should_retry(Ok(&limited), 1));
        assert!(!RetryOnTooManyRequests.should_retry(Ok(&unavailable), 1));
        assert!(RetryOnServerError.should_retry(Ok(&unavailable), 1));
        assert!(RetryOnConnectionFailure.should_retry(Err(&failure), 1));
        assert!(!RetryOnConnectionFailure.should_retry(Ok(&limited), 1));

        let either = OrPredicate::new(vec![
            Box::new(RetryOnTooManyRequests),
            Box::new(RetryOnConnectionFailure),
        ]);
        assert!(either.should_retry(Ok(&limited), 1));
        assert!(either.should_retry(Err(&failure), 1));
        assert!(!either.should_retry(Ok(&unavailable), 1));
    }

    #[test]
    fn retry_after_accepts_seconds_and_dates() {
        let mut headers = HeaderMap::new();
        assert_eq!(retry_after(&headers), None);

        headers.insert(RETRY_AFTER, HeaderValue::from_static("3"));
        assert_eq!(retry_after(&headers), Some(Duration::from_secs(3)));

        headers.insert(RETRY_AFTER, HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"));
        assert_eq!(retry_after(&headers), Some(Duration::ZERO));

        headers.insert(RETRY_AFTER, HeaderValue::from_static("soon"));
        assert_eq!(retry_after(&headers), None);
    }
}
