//! Retry policy for transient HTTP failures.

use std::time::Duration;

/// Statuses worth a second attempt.
pub const RETRYABLE_STATUSES: &[u16] = &[408, 429, 500, 502, 503, 504];

/// Retries after the first attempt.
pub const MAX_RETRIES: u32 = 1;

/// Fixed pause before a retry.
pub const RETRY_DELAY: Duration = Duration::from_millis(500);

/// Fixed-delay retry policy. Network errors are never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            delay: RETRY_DELAY,
        }
    }
}

impl RetryPolicy {
    /// `retries_done` counts retries already performed for this request.
    pub fn should_retry(&self, status: u16, retries_done: u32) -> bool {
        retries_done < self.max_retries && is_retryable(status)
    }
}

pub fn is_retryable(status: u16) -> bool {
    RETRYABLE_STATUSES.contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_single_retry_after_500ms() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 1);
        assert_eq!(policy.delay, Duration::from_millis(500));
    }

    #[test]
    fn test_retryable_statuses() {
        let policy = RetryPolicy::default();
        for status in [408, 429, 500, 502, 503, 504] {
            assert!(policy.should_retry(status, 0), "{} should retry", status);
            assert!(!policy.should_retry(status, 1), "{} retried twice", status);
        }
    }

    #[test]
    fn test_client_errors_not_retried() {
        let policy = RetryPolicy::default();
        for status in [400, 401, 403, 404, 409, 422, 501] {
            assert!(!policy.should_retry(status, 0), "{} should not retry", status);
        }
    }
}
