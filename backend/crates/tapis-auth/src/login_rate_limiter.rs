use crate::{AuthError, RateLimitConfig, Result as AuthErrorResult};

use std::num::NonZeroU32;
use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use log::debug;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Per-identifier login throttle.
///
/// The whole budget is available as a burst and refills evenly over the
/// window, so `max_requests` back-to-back attempts pass and the next one
/// is refused.
pub struct LoginRateLimiter {
    limiter: DefaultKeyedRateLimiter<String>,
    config: RateLimitConfig,
}

impl LoginRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let window = Duration::from_secs(config.window_secs.max(1));
        let period = window / burst.get();

        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        Self {
            limiter: RateLimiter::keyed(quota),
            config,
        }
    }

    /// Identifiers are compared case-insensitively
    #[track_caller]
    pub fn check(&self, identifier: &str) -> AuthErrorResult<()> {
        let key = identifier.trim().to_lowercase();
        self.limiter
            .check_key(&key)
            .map_err(|_| AuthError::RateLimitExceeded {
                limit: self.config.max_requests,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Drop keys whose budget has fully refilled
    pub fn retain_recent(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    /// Identifiers currently holding state
    pub fn tracked_keys(&self) -> usize {
        self.limiter.len()
    }

    /// Prune idle identifiers every `every` until the limiter is dropped.
    pub fn spawn_pruner(limiter: &Arc<Self>, every: Duration) -> JoinHandle<()> {
        let limiter = Arc::downgrade(limiter);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let Some(limiter) = limiter.upgrade() else {
                    break;
                };

                let before = limiter.tracked_keys();
                limiter.retain_recent();
                let pruned = before.saturating_sub(limiter.tracked_keys());
                if pruned > 0 {
                    debug!("Pruned {} idle login rate limit keys", pruned);
                }
            }
        })
    }
}
