use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_RATE_LIMIT_MAX_REQUESTS,
    DEFAULT_RATE_LIMIT_WINDOW_SECS,
};

use serde::Deserialize;

/// Login attempts allowed per identifier
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            window_secs: DEFAULT_RATE_LIMIT_WINDOW_SECS,
        }
    }
}

impl RateLimitConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_requests == 0 {
            return Err(ConfigError::rate_limit("rate_limit.max_requests must be > 0"));
        }
        if self.window_secs == 0 {
            return Err(ConfigError::rate_limit("rate_limit.window_secs must be > 0"));
        }

        Ok(())
    }
}
