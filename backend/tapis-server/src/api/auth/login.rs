//! Login REST API handlers

use crate::{ApiError, ApiResult, AppState, LoginRequest, LoginResponse, SessionUser};

use tapis_core::{PublicUser, User};
use tapis_db::UserRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use error_location::ErrorLocation;
use log::error;

/// Request header identifying the browser a session was opened from
pub const BROWSER_ID_HEADER: &str = "browser-id";

const WRONG_CREDENTIALS: &str = "Wrong Tapis Username or Password.";
const INVALID_MFA: &str = "Invalid mfa token or recovery code";

// =============================================================================
// Handlers
// =============================================================================

/// POST /rest/login
///
/// Verify credentials against Tapis (provisioning the local user on first
/// login) and open a session.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<LoginResponse> {
    let Json(request) = payload?;
    let identifier = request.email_or_ldap_login_id.as_str();

    state.login_limiter.check(identifier).map_err(|e| {
        state.events.login_failed(identifier, "rate limited");
        ApiError::TooManyRequests {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    request.validate()?;

    let Some(user) = state.bridge.authenticate(identifier, &request.password).await else {
        state.events.login_failed(identifier, "wrong credentials");
        return Err(ApiError::unauthorized(WRONG_CREDENTIALS));
    };

    let used_mfa = verify_mfa(&state, &user, &request).await?;

    let browser_id = headers
        .get(BROWSER_ID_HEADER)
        .and_then(|value| value.to_str().ok());
    let token = state
        .sessions
        .issue(&user, used_mfa, browser_id)
        .map_err(|e| ApiError::internal(format!("Failed to issue session: {}", e)))?;
    let cookie = state.session_cookie.set_cookie(&token)?;

    state.events.login_succeeded(&user);

    Ok(LoginResponse {
        user: PublicUser::from_user(&user, used_mfa),
        cookie,
    })
}

/// GET /rest/login
///
/// The user behind the session cookie
pub async fn current_user(
    State(state): State<AppState>,
    session: SessionUser,
) -> ApiResult<Json<PublicUser>> {
    let user = UserRepository::new(state.pool.clone())
        .find_by_id(session.user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Unauthorized"))?;

    Ok(Json(PublicUser::from_user(&user, session.claims.used_mfa)))
}

// =============================================================================
// Helpers
// =============================================================================

/// True when the session is opened with a verified second factor
async fn verify_mfa(state: &AppState, user: &User, request: &LoginRequest) -> ApiResult<bool> {
    if !user.mfa_enabled {
        return Ok(false);
    }

    let mfa_code = request.mfa_code();
    let recovery_code = request.recovery_code();
    if mfa_code.is_none() && recovery_code.is_none() {
        return Err(ApiError::MfaRequired {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    match state.mfa.validate(user, mfa_code, recovery_code).await {
        Ok(true) => Ok(true),
        Ok(false) => Err(ApiError::unauthorized(INVALID_MFA)),
        Err(e) => {
            error!("MFA validation for user {} failed: {}", user.id, e);
            Err(ApiError::unauthorized(INVALID_MFA))
        }
    }
}
