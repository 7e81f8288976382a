//! Registration rate limiting.
//!
//! An explicitly-owned in-memory store injected through `AppState`, not
//! ambient process state: a map of client identifier to attempt count within
//! a sliding window. Expired entries are pruned on each check; there is no
//! background sweep task.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::error::AppError;

const MAX_ATTEMPTS: u32 = 3;
const WINDOW: Duration = Duration::from_secs(15 * 60);

#[derive(Debug)]
struct Attempt {
    count: u32,
    first_attempt: Instant,
}

/// Per-client registration attempt limiter.
///
/// Clones share the same underlying store, so the limiter can live in
/// `AppState` and be handed to request handlers cheaply.
#[derive(Clone)]
pub struct RegistrationRateLimiter {
    attempts: Arc<Mutex<HashMap<String, Attempt>>>,
    max_attempts: u32,
    window: Duration,
}

impl RegistrationRateLimiter {
    pub fn new() -> Self {
        Self::with_limits(MAX_ATTEMPTS, WINDOW)
    }

    /// Custom limits, used by tests and available for alternative deployments.
    pub fn with_limits(max_attempts: u32, window: Duration) -> Self {
        Self {
            attempts: Arc::new(Mutex::new(HashMap::new())),
            max_attempts,
            window,
        }
    }

    /// Records one attempt for `client` and fails with 429 once the limit for
    /// the current window is exhausted.
    pub fn check(&self, client: &str) -> Result<(), AppError> {
        let mut attempts = self
            .attempts
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();

        attempts.retain(|_, attempt| now.duration_since(attempt.first_attempt) <= self.window);

        let attempt = attempts.entry(client.to_string()).or_insert(Attempt {
            count: 0,
            first_attempt: now,
        });

        if attempt.count >= self.max_attempts {
            let remaining = self
                .window
                .saturating_sub(now.duration_since(attempt.first_attempt));
            return Err(AppError::TooManyRequests {
                retry_after_minutes: (remaining.as_secs().div_ceil(60)).max(1),
            });
        }

        attempt.count += 1;
        Ok(())
    }
}

impl Default for RegistrationRateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_up_to_the_limit_then_rejects() {
        let limiter = RegistrationRateLimiter::with_limits(3, Duration::from_secs(60));

        assert!(limiter.check("10.0.0.1").is_ok());
        assert!(limiter.check("10.0.0.1").is_ok());
        assert!(limiter.check("10.0.0.1").is_ok());

        let err = limiter.check("10.0.0.1").unwrap_err();
        assert!(matches!(err, AppError::TooManyRequests { .. }));
    }

    #[test]
    fn clients_are_tracked_independently() {
        let limiter = RegistrationRateLimiter::with_limits(1, Duration::from_secs(60));

        assert!(limiter.check("10.0.0.1").is_ok());
        assert!(limiter.check("10.0.0.2").is_ok());
        assert!(limiter.check("10.0.0.1").is_err());
    }

    #[test]
    fn window_expiry_resets_the_count() {
        let limiter = RegistrationRateLimiter::with_limits(1, Duration::from_millis(20));

        assert!(limiter.check("10.0.0.1").is_ok());
        assert!(limiter.check("10.0.0.1").is_err());

        std::thread::sleep(Duration::from_millis(30));
        assert!(limiter.check("10.0.0.1").is_ok());
    }
}
