//! Session cookie extractor

use crate::{ApiError, AppState};

use tapis_auth::Claims;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

/// Validated session claims of the caller.
///
/// Rejects with 401 when the cookie is missing, expired or forged.
pub struct SessionUser {
    pub user_id: Uuid,
    pub claims: Claims,
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(token) = state.session_cookie.read(&parts.headers) else {
                return Err(ApiError::unauthorized("Unauthorized"));
            };

            let claims = state.sessions.validate(&token).map_err(|e| {
                log::debug!("Rejected session cookie: {}", e);
                ApiError::unauthorized("Unauthorized")
            })?;

            let user_id = claims
                .user_id()
                .ok_or_else(|| ApiError::unauthorized("Unauthorized"))?;

            Ok(SessionUser { user_id, claims })
        }
    }
}
