use crate::ApiError;

use tapis_config::SessionConfig;

use axum::http::{HeaderMap, HeaderValue, header};

/// Name and attributes of the cookie carrying the session token
#[derive(Debug, Clone)]
pub struct SessionCookie {
    name: String,
    secure: bool,
    max_age_secs: u64,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, secure: bool, max_age_secs: u64) -> Self {
        Self {
            name: name.into(),
            secure,
            max_age_secs,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(&config.cookie_name, config.secure_cookie, config.ttl_secs)
    }

    /// `Set-Cookie` value for a freshly issued token
    pub fn set_cookie(&self, token: &str) -> Result<HeaderValue, ApiError> {
        let mut cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            self.name, token, self.max_age_secs
        );
        if self.secure {
            cookie.push_str("; Secure");
        }

        HeaderValue::from_str(&cookie)
            .map_err(|e| ApiError::internal(format!("Invalid session cookie: {}", e)))
    }

    /// Token from the request's `Cookie` headers, if present
    pub fn read(&self, headers: &HeaderMap) -> Option<String> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.name)
            .map(|(_, token)| token.to_string())
            .filter(|token| !token.is_empty())
    }
}
