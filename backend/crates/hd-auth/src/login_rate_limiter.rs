use crate::{AuthError, RateLimitConfig, Result as AuthErrorResult};

use std::num::NonZeroU32;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

/// Login attempt limiter keyed by (case-folded) username.
///
/// Allows a burst of `max_attempts`, then replenishes one attempt every
/// `window_secs / max_attempts`.
pub struct LoginRateLimiter {
    limiter: DefaultKeyedRateLimiter<String>,
    config: RateLimitConfig,
}

impl LoginRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_attempts).unwrap_or(NonZeroU32::MIN);
        let period_ms = (config.window_secs.max(1) * 1000) / u64::from(burst.get());
        let quota = Quota::with_period(Duration::from_millis(period_ms.max(1)))
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst);

        Self {
            limiter: RateLimiter::keyed(quota),
            config,
        }
    }

    /// Record an attempt for `username`, erroring once the budget is spent
    #[track_caller]
    pub fn check(&self, username: &str) -> AuthErrorResult<()> {
        self.limiter
            .check_key(&username.trim().to_lowercase())
            .map_err(|_| AuthError::RateLimitExceeded {
                limit: self.config.max_attempts,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Drop state for usernames whose budget has fully replenished
    pub fn forget_stale(&self) {
        self.limiter.retain_recent();
    }

    pub fn tracked_keys(&self) -> usize {
        self.limiter.len()
    }
}
