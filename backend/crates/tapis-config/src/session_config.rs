use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_COOKIE_NAME, DEFAULT_SESSION_TTL_SECS,
    MAX_SESSION_TTL_SECS, MIN_JWT_SECRET_LENGTH, MIN_SESSION_TTL_SECS,
};

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// HS256 secret; a random one is generated at start-up when absent
    pub jwt_secret: Option<String>,
    pub ttl_secs: u64,
    pub cookie_name: String,
    pub secure_cookie: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            ttl_secs: DEFAULT_SESSION_TTL_SECS,
            cookie_name: String::from(DEFAULT_COOKIE_NAME),
            secure_cookie: false,
        }
    }
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("ttl_secs", &self.ttl_secs)
            .field("cookie_name", &self.cookie_name)
            .field("secure_cookie", &self.secure_cookie)
            .finish()
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(secret) = &self.jwt_secret
            && secret.len() < MIN_JWT_SECRET_LENGTH
        {
            return Err(ConfigError::session(format!(
                "session.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }
        if !(MIN_SESSION_TTL_SECS..=MAX_SESSION_TTL_SECS).contains(&self.ttl_secs) {
            return Err(ConfigError::session(format!(
                "session.ttl_secs must be between {} and {}, got {}",
                MIN_SESSION_TTL_SECS, MAX_SESSION_TTL_SECS, self.ttl_secs
            )));
        }
        if self.cookie_name.is_empty()
            || !self
                .cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ConfigError::session(format!(
                "session.cookie_name must be a non-empty token of [A-Za-z0-9_-], got '{}'",
                self.cookie_name
            )));
        }

        Ok(())
    }
}
