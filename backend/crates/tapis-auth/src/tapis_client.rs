use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

pub const DEFAULT_TAPIS_BASE_URL: &str = "https://portals.tapis.io";
pub const DEFAULT_TAPIS_AUTH_ENDPOINT: &str = "/v3/oauth2/tokens";

const MAX_LOGGED_BODY_CHARS: usize = 200;

#[derive(Serialize)]
struct PasswordGrant<'a> {
    username: &'a str,
    password: &'a str,
    grant_type: &'static str,
}

/// HTTP client for the Tapis OAuth2 token endpoint.
///
/// Only the status code of the answer matters: a 2xx proves the credentials,
/// the issued token itself is discarded.
#[derive(Debug, Clone)]
pub struct TapisClient {
    http: reqwest::Client,
    token_url: String,
}

impl TapisClient {
    #[track_caller]
    pub fn new(
        base_url: &str,
        auth_endpoint: &str,
        timeout: Option<Duration>,
    ) -> AuthErrorResult<Self> {
        let token_url = join_token_url(base_url, auth_endpoint);

        reqwest::Url::parse(&token_url).map_err(|e| AuthError::InvalidEndpoint {
            message: format!("'{}': {}", token_url, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| AuthError::Transport {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self { http, token_url })
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Ask Tapis for a password-grant token. Ok means the credentials are valid.
    pub async fn verify_credentials(&self, username: &str, password: &str) -> AuthErrorResult<()> {
        let grant = PasswordGrant {
            username,
            password,
            grant_type: "password",
        };

        let response = self
            .http
            .post(&self.token_url)
            .header(CONTENT_TYPE, "application/json")
            .json(&grant)
            .send()
            .await
            .map_err(|e| AuthError::Transport {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(
                "Tapis token endpoint answered {} for '{}': {}",
                status,
                username,
                body.chars().take(MAX_LOGGED_BODY_CHARS).collect::<String>()
            );
            return Err(AuthError::IdentityRejected {
                status: status.as_u16(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

/// `{base}/{endpoint}` with exactly one slash at the seam
pub fn join_token_url(base_url: &str, auth_endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        auth_endpoint.trim_start_matches('/')
    )
}
