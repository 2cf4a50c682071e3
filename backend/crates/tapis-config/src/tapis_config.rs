use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TAPIS_AUTH_ENDPOINT,
    DEFAULT_TAPIS_BASE_URL, DEFAULT_TAPIS_ENV_FILE, MAX_REQUEST_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Where the Tapis token endpoint lives and how long to wait for it
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TapisConfig {
    pub base_url: String,
    pub auth_endpoint: String,
    /// dotenv-style file holding `TAPIS_BASE_URL` / `TAPIS_AUTH_ENDPOINT`
    pub env_file: String,
    /// 0 disables the timeout
    pub request_timeout_secs: u64,
}

impl Default for TapisConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_TAPIS_BASE_URL),
            auth_endpoint: String::from(DEFAULT_TAPIS_AUTH_ENDPOINT),
            env_file: String::from(DEFAULT_TAPIS_ENV_FILE),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl TapisConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let base = self.base_url.trim();
        let host = base
            .strip_prefix("https://")
            .or_else(|| base.strip_prefix("http://"));
        match host {
            None => {
                return Err(ConfigError::tapis(format!(
                    "tapis.base_url must start with http:// or https://, got '{}'",
                    self.base_url
                )));
            }
            Some(rest) if rest.is_empty() || rest.starts_with('/') => {
                return Err(ConfigError::tapis(format!(
                    "tapis.base_url has no host: '{}'",
                    self.base_url
                )));
            }
            Some(_) => {}
        }
        if self.auth_endpoint.trim_matches('/').is_empty() {
            return Err(ConfigError::tapis("tapis.auth_endpoint cannot be empty"));
        }
        if self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ConfigError::tapis(format!(
                "tapis.request_timeout_secs must be 0-{}, got {}",
                MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}
