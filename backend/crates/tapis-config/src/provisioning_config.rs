use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_RELOAD_ATTEMPTS, DEFAULT_RELOAD_DELAY_MS,
    MAX_RELOAD_ATTEMPTS, MAX_RELOAD_DELAY_MS, MIN_RELOAD_ATTEMPTS,
};

use serde::Deserialize;

/// Read-back of a freshly provisioned user
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProvisioningConfig {
    pub reload_attempts: u32,
    pub reload_delay_ms: u64,
}

impl Default for ProvisioningConfig {
    fn default() -> Self {
        Self {
            reload_attempts: DEFAULT_RELOAD_ATTEMPTS,
            reload_delay_ms: DEFAULT_RELOAD_DELAY_MS,
        }
    }
}

impl ProvisioningConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_RELOAD_ATTEMPTS..=MAX_RELOAD_ATTEMPTS).contains(&self.reload_attempts) {
            return Err(ConfigError::provisioning(format!(
                "provisioning.reload_attempts must be {}-{}, got {}",
                MIN_RELOAD_ATTEMPTS, MAX_RELOAD_ATTEMPTS, self.reload_attempts
            )));
        }
        if self.reload_delay_ms > MAX_RELOAD_DELAY_MS {
            return Err(ConfigError::provisioning(format!(
                "provisioning.reload_delay_ms must be 0-{}, got {}",
                MAX_RELOAD_DELAY_MS, self.reload_delay_ms
            )));
        }

        Ok(())
    }
}
